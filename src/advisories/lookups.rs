use lazy_static::lazy_static;
use std::collections::BTreeMap;

lazy_static! {
    pub static ref DEPRECATED_LOOKUP: BTreeMap<&'static str, &'static str> = {
        let mut map = BTreeMap::new();
        map.insert("auto_ptr", "auto_ptr is deprecated as of C++11. Consider using shared_ptr or unique_ptr.");
        map.insert("bcmp", "bcmp is a POSIX standard function, and is removed as of POSIX.1-2008. Consider using memcmp instead.");
        map.insert("bcopy", "bcopy is a POSIX standard function, and is removed as of POSIX.1-2008. Consider using memcpy instead.");
        map.insert("binary_function", "binary_function is deprecated as of C++11.");
        map.insert("binder1st", "binder1st is deprecated as of C++11. Consider using std::bind instead.");
        map.insert("binder2nd", "binder2nd is deprecated as of C++11. Consider using std::bind instead.");
        map.insert("bind1st", "bind1st is deprecated as of C++11. Consider using std::bind instead.");
        map.insert("bind2nd", "bind2nd is deprecated as of C++11. Consider using std::bind instead.");
        map.insert("bzero", "bzero is a POSIX standard function, and is removed as of POSIX.1-2008. Consider using memset instead.");
        map.insert("const_mem_fun_t", "const_mem_fun_t is deprecated as of C++11.");
        map.insert("const_mem_fun1_t", "const_mem_fun1_t is deprecated as of C++11.");
        map.insert("const_mem_fun_ref_t", "const_mem_fun_ref_t is deprecated as of C++11.");
        map.insert("const_mem_fun1_ref_t", "const_mem_fun1_ref_t is deprecated as of C++11.");
        map.insert("get_unexpected", "get_unexpected is deprecated as of C++11.");
        map.insert("gets", "gets is removed in the C11 and C++11 standards.");
        map.insert("istrstream", "istrstream is deprecated as of C++11.");
        map.insert("mem_fun", "mem_fun is deprecated as of C++11. Consider using std::mem_fn instead.");
        map.insert("mem_fun_ref", "mem_fun_ref is deprecated as of C++11. Consider using std::bind or std::function instead.");
        map.insert("mem_fun_ref_t", "mem_fun_ref_t is deprecated as of C++11.");
        map.insert("mem_fun1_ref_t", "mem_fun1_ref_t is deprecated as of C++11.");
        map.insert("mem_fun_t", "mem_fun_t is deprecated as of C++11.");
        map.insert("mem_fun1_t", "mem_fun1_t is deprecated as of C++11.");
        map.insert("ostrstream", "ostrstream is deprecated as of C++11.");
        map.insert("pointer_to_binary_function", "pointer_to_binary_function is deprecated as of C++11.");
        map.insert("pointer_to_unary_function", "pointer_to_unary_function is deprecated as of C++11.");
        map.insert("ptr_fun", "ptr_fun is deprecated as of C++11. Consider using std::function or std::ref instead.");
        map.insert("set_unexpected", "set_unexpected is deprecated as of C++11.");
        map.insert("strstream", "strstream is deprecated as of C++11.");
        map.insert("strstreambuf", "strstreambuf is deprecated as of C++11.");
        map.insert("unary_function", "unary_function is deprecated as of C++11.");
        map.insert("unexpected", "unexpected is deprecated as of C++11.");
        map.insert("unexpected_handler", "unexpected_handler is deprecated as of C++11.");
        map
    };

    pub static ref CAUTIONARY_LOOKUP: BTreeMap<&'static str, &'static str> = {
        let mut map = BTreeMap::new();
        map.insert("alloca", "alloca can be a dangerous function to use.\nIf the allocation attempt by alloca causes a stack overflow, then behavior is undefined.\nConsider using malloc or new.");

        // Windows
        map.insert("ChangeWindowMessageFilter", "Using ChangeWindowMessageFilter is not recommended. It is recommended that ChangeWindowMessageFilterEx be used instead.");
        map.insert("GetClassInfo", "GetClassInfo has been superseded by GetClassInfoEx. Consider using it instead.");
        map.insert("GetClassLong", "GetClassLong has been superseded by GetClassLongPtr. Consider using it instead to have 32-bit and 64-bit compatible code.");
        map.insert("GetWindowLong", "GetWindowLong has been superseded by GetWindowLongPtr. Consider using it instead to have 32-bit and 64-bit compatible code.");
        map.insert("RegisterClass", "RegisterClass has been superseded by RegisterClassEx. Consider using it instead.");
        map.insert("SetClassLong", "SetClassLong has been superseded by SetClassLongPtr. Consider using it instead to have 32-bit and 64-bit compatible code.");
        map.insert("SetWindowLong", "SetWindowLong has been superseded by SetWindowLongPtr. Consider using it instead to have 32-bit and 64-bit compatible code.");
        map
    };
}
