//! Session identification.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::net::{Ipv4Addr, Ipv6Addr};
use crate::bstring::BitString;
use crate::constructed::{
    decode_root_choice_index, encode_choice_index, encode_optional,
    SequencePreamble,
};
use crate::decode::{BitStreamReader, DecodeError, DecodeErrorKind};
use crate::encode::{BitStream, EncodeError};
use crate::int::ConstrainedInt;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::ostring::OctetString;
use crate::string::{CharSet, Ia5String, PermittedAlphabet, RestrictedString};
use crate::tag::Tag;
use super::MAX_NUM_SESSIONS;


//------------ SessionList ---------------------------------------------------

crate::sequence_of! {
    /// The sessions a SET reports as active.
    ///
    /// ```text
    /// SessionList ::= SEQUENCE SIZE (1..maxnumSessions) OF SessionInformation
    /// ```
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct SessionList:
        SEQUENCE (SIZE (1..MAX_NUM_SESSIONS)) OF SessionInformation;
}


//------------ SessionInformation --------------------------------------------

/// Information about a single session.
///
/// ```text
/// SessionInformation ::= SEQUENCE {
///     sessionID  SessionID,
///     ...
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionInformation {
    pub session_id: SessionId,
}

impl Asn1Object for SessionInformation {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        SequencePreamble::encode(target, true, &[])?;
        self.session_id.encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, true, 0)?;
        self.session_id.decode_per(source)?;
        preamble.skip_extensions(source)?;
        Ok(())
    }
}


//------------ SessionId -----------------------------------------------------

/// The identifier of a SUPL session.
///
/// ```text
/// SessionID ::= SEQUENCE {
///     setSessionID  SetSessionID OPTIONAL,
///     slpSessionID  SlpSessionID OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionId {
    pub set_session_id: Option<SetSessionId>,
    pub slp_session_id: Option<SlpSessionId>,
}

impl Asn1Object for SessionId {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        SequencePreamble::encode(target, false, &[
            self.set_session_id.is_some(),
            self.slp_session_id.is_some(),
        ])?;
        encode_optional(self.set_session_id.as_ref(), target)?;
        encode_optional(self.slp_session_id.as_ref(), target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, false, 2)?;
        self.set_session_id = preamble.take_optional(0, source)?;
        self.slp_session_id = preamble.take_optional(1, source)?;
        Ok(())
    }
}


//------------ SetSessionId --------------------------------------------------

/// The part of the session identifier assigned by the SET.
///
/// ```text
/// SetSessionID ::= SEQUENCE {
///     sessionId  INTEGER(0..65535),
///     setId      SETId
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SetSessionId {
    pub session_id: ConstrainedInt<0, 65535>,
    pub set_id: SetId,
}

impl Asn1Object for SetSessionId {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        self.session_id.encode_per(target)?;
        self.set_id.encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.session_id.decode_per(source)?;
        self.set_id.decode_per(source)
    }
}


//------------ SetId ---------------------------------------------------------

/// The identity of a SET.
///
/// ```text
/// SETId ::= CHOICE {
///     msisdn     OCTET STRING(SIZE (8)),
///     mdn        OCTET STRING(SIZE (8)),
///     min        BIT STRING(SIZE (34)),
///     imsi       OCTET STRING(SIZE (8)),
///     nai        IA5String(SIZE (1..1000)),
///     iPAddress  IPAddress,
///     ...
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SetId {
    Msisdn(OctetString<8, 8>),
    Mdn(OctetString<8, 8>),
    Min(BitString<34, 34>),
    Imsi(OctetString<8, 8>),
    Nai(Ia5String<1, 1000>),
    IpAddress(IpAddress),
}

impl SetId {
    const ALTERNATIVES: usize = 6;

    fn index(&self) -> usize {
        match *self {
            SetId::Msisdn(_) => 0,
            SetId::Mdn(_) => 1,
            SetId::Min(_) => 2,
            SetId::Imsi(_) => 3,
            SetId::Nai(_) => 4,
            SetId::IpAddress(_) => 5,
        }
    }
}

impl Default for SetId {
    fn default() -> Self {
        SetId::Msisdn(OctetString::default())
    }
}

impl Asn1Object for SetId {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        encode_choice_index(target, self.index(), Self::ALTERNATIVES, true)?;
        match *self {
            SetId::Msisdn(ref value) => value.encode_per(target),
            SetId::Mdn(ref value) => value.encode_per(target),
            SetId::Min(ref value) => value.encode_per(target),
            SetId::Imsi(ref value) => value.encode_per(target),
            SetId::Nai(ref value) => value.encode_per(target),
            SetId::IpAddress(ref value) => value.encode_per(target),
        }
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let index = decode_root_choice_index(
            source, Self::ALTERNATIVES, true
        )?;
        *self = match index {
            0 => SetId::Msisdn(OctetString::take_from(source)?),
            1 => SetId::Mdn(OctetString::take_from(source)?),
            2 => SetId::Min(BitString::take_from(source)?),
            3 => SetId::Imsi(OctetString::take_from(source)?),
            4 => SetId::Nai(Ia5String::take_from(source)?),
            5 => SetId::IpAddress(IpAddress::take_from(source)?),
            _ => return Err(invalid_choice(source, index, Self::ALTERNATIVES))
        };
        Ok(())
    }
}


//------------ SlpSessionId --------------------------------------------------

/// The part of the session identifier assigned by the SLP.
///
/// ```text
/// SlpSessionID ::= SEQUENCE {
///     sessionID  OCTET STRING(SIZE (4)),
///     slpId      SLPAddress
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlpSessionId {
    pub session_id: OctetString<4, 4>,
    pub slp_id: SlpAddress,
}

impl Asn1Object for SlpSessionId {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        self.session_id.encode_per(target)?;
        self.slp_id.encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.session_id.decode_per(source)?;
        self.slp_id.decode_per(source)
    }
}


//------------ SlpAddress ----------------------------------------------------

/// The address of an SLP.
///
/// ```text
/// SLPAddress ::= CHOICE {
///     iPAddress  IPAddress,
///     fQDN       FQDN,
///     ...
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SlpAddress {
    IpAddress(IpAddress),
    Fqdn(Fqdn),
}

impl Default for SlpAddress {
    fn default() -> Self {
        SlpAddress::IpAddress(IpAddress::default())
    }
}

impl Asn1Object for SlpAddress {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        match *self {
            SlpAddress::IpAddress(ref value) => {
                encode_choice_index(target, 0, 2, true)?;
                value.encode_per(target)
            }
            SlpAddress::Fqdn(ref value) => {
                encode_choice_index(target, 1, 2, true)?;
                value.encode_per(target)
            }
        }
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        *self = match decode_root_choice_index(source, 2, true)? {
            0 => SlpAddress::IpAddress(IpAddress::take_from(source)?),
            1 => SlpAddress::Fqdn(Fqdn::take_from(source)?),
            index => return Err(invalid_choice(source, index, 2))
        };
        Ok(())
    }
}


//------------ IpAddress -----------------------------------------------------

/// An IP address.
///
/// ```text
/// IPAddress ::= CHOICE {
///     ipv4Address  OCTET STRING(SIZE (4)),
///     ipv6Address  OCTET STRING(SIZE (16))
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IpAddress {
    Ipv4(OctetString<4, 4>),
    Ipv6(OctetString<16, 16>),
}

impl Default for IpAddress {
    fn default() -> Self {
        IpAddress::Ipv4(OctetString::default())
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::Ipv4(OctetString::new_unchecked(
            addr.octets().to_vec().into()
        ))
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::Ipv6(OctetString::new_unchecked(
            addr.octets().to_vec().into()
        ))
    }
}

impl Asn1Object for IpAddress {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        match *self {
            IpAddress::Ipv4(ref value) => {
                encode_choice_index(target, 0, 2, false)?;
                value.encode_per(target)
            }
            IpAddress::Ipv6(ref value) => {
                encode_choice_index(target, 1, 2, false)?;
                value.encode_per(target)
            }
        }
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        *self = match decode_root_choice_index(source, 2, false)? {
            0 => IpAddress::Ipv4(OctetString::take_from(source)?),
            1 => IpAddress::Ipv6(OctetString::take_from(source)?),
            index => return Err(invalid_choice(source, index, 2))
        };
        Ok(())
    }
}


//------------ Fqdn ----------------------------------------------------------

/// A fully qualified domain name.
///
/// ```text
/// FQDN ::= VisibleString(FROM ("a".."z" | "A".."Z" | "0".."9" | ".-"))
///     (SIZE (1..255))
/// ```
pub type Fqdn = RestrictedString<FqdnCharSet, 1, 255>;

/// The character set of [`Fqdn`].
#[derive(Clone, Copy, Debug)]
pub struct FqdnCharSet;

impl CharSet for FqdnCharSet {
    const TAG: Tag = Tag::VISIBLE_STRING;
    const ALPHABET: PermittedAlphabet = PermittedAlphabet::new(
        b"-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
    );
}


//------------ Helpers -------------------------------------------------------

/// Creates the error for a choice index without an alternative.
fn invalid_choice<M>(
    source: &BitStreamReader<M>, index: usize, alternatives: usize
) -> DecodeError {
    source.err(DecodeErrorKind::InvalidChoiceIndex {
        index: index as u64, alternatives
    })
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::{Aligned, Unaligned};
    use super::*;

    fn slp_session(addr: SlpAddress) -> SlpSessionId {
        SlpSessionId {
            session_id: OctetString::from_slice(&[1, 2, 3, 4]).unwrap(),
            slp_id: addr,
        }
    }

    #[test]
    fn fqdn_alphabet() {
        let alphabet = FqdnCharSet::ALPHABET;
        assert_eq!(alphabet.len(), 64);
        assert_eq!(alphabet.char_bits::<Unaligned>(), 6);
        assert_eq!(alphabet.char_bits::<Aligned>(), 8);
        assert!("supl.example-1.com".parse::<Fqdn>().is_ok());
        assert_eq!(
            "supl_example.com".parse::<Fqdn>(),
            Err(EncodeError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn fqdn_encoding() {
        // Unaligned uses the index in the alphabet, aligned the value.
        let fqdn: Fqdn = "a.B".parse().unwrap();
        let mut stream = BitStream::<Unaligned>::new();
        fqdn.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 8 + 3 * 6);
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(Fqdn::take_from(&mut reader).unwrap(), fqdn);

        assert_eq!(
            fqdn.to_per_aligned_vec().unwrap(), [0x02, b'a', b'.', b'B']
        );
    }

    #[test]
    fn ip_address() {
        let v4 = IpAddress::from(Ipv4Addr::new(10, 0, 0, 1));
        let mut stream = BitStream::<Aligned>::new();
        v4.encode_per(&mut stream).unwrap();
        assert_eq!(stream.as_slice(), &[0x00, 10, 0, 0, 1]);

        let v6 = IpAddress::from(Ipv6Addr::LOCALHOST);
        let octets = v6.to_per_unaligned_vec().unwrap();
        assert_eq!(octets.len(), 17);
        assert_eq!(octets[0], 0x80);
        assert_eq!(IpAddress::from_per_unaligned(&octets).unwrap(), v6);
    }

    #[test]
    fn slp_session_id() {
        for addr in [
            SlpAddress::IpAddress(Ipv4Addr::new(192, 0, 2, 7).into()),
            SlpAddress::Fqdn("h-slp.mnc001.mcc001.pub.3gppnetwork.org"
                .parse().unwrap()),
        ] {
            let id = slp_session(addr);
            assert_eq!(
                SlpSessionId::from_per_unaligned(
                    &id.to_per_unaligned_vec().unwrap()
                ).unwrap(),
                id
            );
            assert_eq!(
                SlpSessionId::from_per_aligned(
                    &id.to_per_aligned_vec().unwrap()
                ).unwrap(),
                id
            );
        }
    }

    #[test]
    fn set_ids() {
        let ids = [
            SetId::Msisdn(OctetString::from_slice(b"\x91\x12\x34\x56\x78\x90\x12\xF3").unwrap()),
            SetId::Mdn(OctetString::default()),
            SetId::Min(BitString::new(&[0xA5; 5], 34).unwrap()),
            SetId::Imsi(OctetString::from_slice(&[0x21; 8]).unwrap()),
            SetId::Nai("set@example.org".parse().unwrap()),
            SetId::IpAddress(Ipv6Addr::UNSPECIFIED.into()),
        ];
        for (index, id) in ids.iter().enumerate() {
            let stream = id.encode_per_unaligned().unwrap();
            // Extension bit, then three bits of index.
            assert_eq!(stream.as_slice()[0] >> 4, index as u8);
            assert_eq!(SetId::from_per_unaligned(stream.as_slice()), Ok(id.clone()));
            assert_eq!(
                SetId::from_per_aligned(&id.to_per_aligned_vec().unwrap()),
                Ok(id.clone())
            );
        }

        // Indexes six and seven have no alternative.
        assert_eq!(
            SetId::from_per_unaligned(&[0b0110_0000]).unwrap_err().kind(),
            &DecodeErrorKind::InvalidChoiceIndex { index: 6, alternatives: 6 }
        );
    }

    #[test]
    fn set_id_extension() {
        // Extension bit set, extension alternative 0.
        let err = SetId::from_per_unaligned(&[0x80, 0x00]).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::UnknownExtension { index: 0 });
    }

    #[test]
    fn session_information() {
        let info = SessionInformation {
            session_id: SessionId {
                set_session_id: Some(SetSessionId {
                    session_id: ConstrainedInt::new(4711).unwrap(),
                    set_id: SetId::Imsi(
                        OctetString::from_slice(&[0x62; 8]).unwrap()
                    ),
                }),
                slp_session_id: None,
            },
        };
        let stream = info.encode_per_unaligned().unwrap();
        // Extension bit, two presence bits, 16 bits of session ID, one
        // extension bit, three bits of index, 64 bits of IMSI.
        assert_eq!(stream.bit_len(), 1 + 2 + 16 + 1 + 3 + 64);
        assert_eq!(stream.as_slice()[0] >> 5, 0b010);
        assert_eq!(
            SessionInformation::from_per_unaligned(stream.as_slice()),
            Ok(info.clone())
        );

        let empty = SessionInformation::default();
        assert_eq!(empty.to_per_aligned_vec().unwrap(), [0x00]);
    }

    #[test]
    fn session_information_skips_extensions() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        SessionId::default().encode_per(&mut stream).unwrap();
        crate::length::encode_normally_small_length(&mut stream, 1).unwrap();
        stream.append_bit(true);
        crate::length::encode_open_type(&mut stream, |target| {
            target.append_bits(0x1234, 16)
        }).unwrap();
        true.encode_per(&mut stream).unwrap();

        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        let info = SessionInformation::take_from(&mut reader).unwrap();
        assert_eq!(info, SessionInformation::default());
        assert!(bool::take_from(&mut reader).unwrap());
    }
}
