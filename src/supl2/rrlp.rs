//! RRLP assistance data components.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::constructed::{encode_optional, SequencePreamble};
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::int::ConstrainedInt;
use crate::mode::Mode;
use crate::object::Asn1Object;


//------------ CnavClockModel ------------------------------------------------

/// The clock correction parameters of a GPS CNAV navigation message.
///
/// ```text
/// CNAVclockModel ::= SEQUENCE {
///     cnavToc      INTEGER (0..2015),
///     cnavTop      INTEGER (0..2015),
///     cnavURA0     INTEGER (-16..15),
///     cnavURA1     INTEGER (0..7),
///     cnavURA2     INTEGER (0..7),
///     cnavAf2      INTEGER (-512..511),
///     cnavAf1      INTEGER (-524288..524287),
///     cnavAf0      INTEGER (-33554432..33554431),
///     cnavTgd      INTEGER (-4096..4095),
///     cnavISCl1cp  INTEGER (-4096..4095) OPTIONAL,
///     cnavISCl1cd  INTEGER (-4096..4095) OPTIONAL,
///     cnavISCl1ca  INTEGER (-4096..4095) OPTIONAL,
///     cnavISCl2c   INTEGER (-4096..4095) OPTIONAL,
///     cnavISCl5i5  INTEGER (-4096..4095) OPTIONAL,
///     cnavISCl5q5  INTEGER (-4096..4095) OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CnavClockModel {
    pub toc: ConstrainedInt<0, 2015>,
    pub top: ConstrainedInt<0, 2015>,
    pub ura0: ConstrainedInt<-16, 15>,
    pub ura1: ConstrainedInt<0, 7>,
    pub ura2: ConstrainedInt<0, 7>,
    pub af2: ConstrainedInt<-512, 511>,
    pub af1: ConstrainedInt<-524_288, 524_287>,
    pub af0: ConstrainedInt<-33_554_432, 33_554_431>,
    pub tgd: InterSignalCorrection,
    pub isc_l1cp: Option<InterSignalCorrection>,
    pub isc_l1cd: Option<InterSignalCorrection>,
    pub isc_l1ca: Option<InterSignalCorrection>,
    pub isc_l2c: Option<InterSignalCorrection>,
    pub isc_l5i5: Option<InterSignalCorrection>,
    pub isc_l5q5: Option<InterSignalCorrection>,
}

/// A group delay or inter-signal correction.
pub type InterSignalCorrection = ConstrainedInt<-4096, 4095>;

impl CnavClockModel {
    fn iscs(&self) -> [Option<&InterSignalCorrection>; 6] {
        [
            self.isc_l1cp.as_ref(),
            self.isc_l1cd.as_ref(),
            self.isc_l1ca.as_ref(),
            self.isc_l2c.as_ref(),
            self.isc_l5i5.as_ref(),
            self.isc_l5q5.as_ref(),
        ]
    }
}

impl Asn1Object for CnavClockModel {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        let iscs = self.iscs();
        SequencePreamble::encode(
            target, false, &iscs.map(|isc| isc.is_some())
        )?;
        self.toc.encode_per(target)?;
        self.top.encode_per(target)?;
        self.ura0.encode_per(target)?;
        self.ura1.encode_per(target)?;
        self.ura2.encode_per(target)?;
        self.af2.encode_per(target)?;
        self.af1.encode_per(target)?;
        self.af0.encode_per(target)?;
        self.tgd.encode_per(target)?;
        for isc in iscs {
            encode_optional(isc, target)?;
        }
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, false, 6)?;
        self.toc.decode_per(source)?;
        self.top.decode_per(source)?;
        self.ura0.decode_per(source)?;
        self.ura1.decode_per(source)?;
        self.ura2.decode_per(source)?;
        self.af2.decode_per(source)?;
        self.af1.decode_per(source)?;
        self.af0.decode_per(source)?;
        self.tgd.decode_per(source)?;
        self.isc_l1cp = preamble.take_optional(0, source)?;
        self.isc_l1cd = preamble.take_optional(1, source)?;
        self.isc_l1ca = preamble.take_optional(2, source)?;
        self.isc_l2c = preamble.take_optional(3, source)?;
        self.isc_l5i5 = preamble.take_optional(4, source)?;
        self.isc_l5q5 = preamble.take_optional(5, source)?;
        Ok(())
    }
}


//============ Tests =========================================================
