#![no_main]

use libfuzzer_sys::fuzz_target;
use supl_per::{Asn1Object, BitString, Ia5String, OctetString, VisibleString};
use supl_per::supl2::Fqdn;

macro_rules! decode_string {
    ( $data:expr, $ty:ty ) => {{
        if let Ok(value) = <$ty>::from_per_unaligned($data) {
            value.to_per_unaligned_vec().unwrap();
        }
        if let Ok(value) = <$ty>::from_per_aligned($data) {
            value.to_per_aligned_vec().unwrap();
        }
    }}
}

fuzz_target!(|data: &[u8]| {
    decode_string!(data, Ia5String<1, 1000>);
    decode_string!(data, Ia5String<2, 2>);
    decode_string!(data, VisibleString<0, 70000>);
    decode_string!(data, Fqdn);
    decode_string!(data, OctetString<4, 4>);
    decode_string!(data, OctetString<0, 100>);
    decode_string!(data, BitString<34, 34>);
    decode_string!(data, BitString<1, 160>);
});
