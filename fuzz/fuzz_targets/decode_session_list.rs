#![no_main]

use libfuzzer_sys::fuzz_target;
use supl_per::Asn1Object;
use supl_per::supl2::SessionList;

fuzz_target!(|data: &[u8]| {
    if let Ok(list) = SessionList::from_per_unaligned(data) {
        let octets = list.to_per_unaligned_vec().unwrap();
        assert_eq!(SessionList::from_per_unaligned(&octets).unwrap(), list);
    }
    if let Ok(list) = SessionList::from_per_aligned(data) {
        let octets = list.to_per_aligned_vec().unwrap();
        assert_eq!(SessionList::from_per_aligned(&octets).unwrap(), list);
    }
});
