#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, String, i32)>, String, String)| {
    let mut router = pathtrie::Router::new();

    for (method, path, item) in data.0 {
        if router.insert(method, &path, item).is_err() {
            return;
        }
    }

    let _ = router.at(&data.1, &data.2);
    let _ = router.allowed(&data.2);
});
