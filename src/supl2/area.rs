//! Geographic target areas.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::constructed::{
    decode_enumerated, decode_root_choice_index, encode_choice_index,
    encode_enumerated, encode_optional, SequencePreamble,
};
use crate::decode::{BitStreamReader, DecodeError, DecodeErrorKind};
use crate::encode::{BitStream, EncodeError};
use crate::int::ConstrainedInt;
use crate::mode::Mode;
use crate::object::Asn1Object;
use super::MAX_NUM_GEO_AREA;


//------------ GeographicTargetAreaList --------------------------------------

crate::sequence_of! {
    /// The areas an area event refers to.
    ///
    /// ```text
    /// GeographicTargetAreaList ::=
    ///     SEQUENCE (SIZE (1..maxNumGeoArea)) OF GeographicTargetArea
    /// ```
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct GeographicTargetAreaList:
        SEQUENCE (SIZE (1..MAX_NUM_GEO_AREA)) OF GeographicTargetArea;
}


//------------ GeographicTargetArea ------------------------------------------

/// A single geographic area.
///
/// ```text
/// GeographicTargetArea ::= CHOICE {
///     circularArea    CircularArea,
///     ellipticalArea  EllipticalArea,
///     polygonArea     PolygonArea,
///     ...
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GeographicTargetArea {
    CircularArea(CircularArea),
    EllipticalArea(EllipticalArea),
    PolygonArea(PolygonArea),
}

impl GeographicTargetArea {
    const ALTERNATIVES: usize = 3;

    fn index(&self) -> usize {
        match *self {
            GeographicTargetArea::CircularArea(_) => 0,
            GeographicTargetArea::EllipticalArea(_) => 1,
            GeographicTargetArea::PolygonArea(_) => 2,
        }
    }
}

impl Default for GeographicTargetArea {
    fn default() -> Self {
        GeographicTargetArea::CircularArea(CircularArea::default())
    }
}

impl Asn1Object for GeographicTargetArea {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        encode_choice_index(target, self.index(), Self::ALTERNATIVES, true)?;
        match *self {
            GeographicTargetArea::CircularArea(ref area) => {
                area.encode_per(target)
            }
            GeographicTargetArea::EllipticalArea(ref area) => {
                area.encode_per(target)
            }
            GeographicTargetArea::PolygonArea(ref area) => {
                area.encode_per(target)
            }
        }
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let index = decode_root_choice_index(
            source, Self::ALTERNATIVES, true
        )?;
        *self = match index {
            0 => {
                GeographicTargetArea::CircularArea(
                    CircularArea::take_from(source)?
                )
            }
            1 => {
                GeographicTargetArea::EllipticalArea(
                    EllipticalArea::take_from(source)?
                )
            }
            2 => {
                GeographicTargetArea::PolygonArea(
                    PolygonArea::take_from(source)?
                )
            }
            _ => {
                return Err(source.err(DecodeErrorKind::InvalidChoiceIndex {
                    index: index as u64,
                    alternatives: Self::ALTERNATIVES,
                }))
            }
        };
        Ok(())
    }
}


//------------ CircularArea --------------------------------------------------

/// A circle around a point.
///
/// ```text
/// CircularArea ::= SEQUENCE {
///     coordinate  Coordinate,
///     radius      INTEGER(1..1000000),
///     radius-min  INTEGER(1..1000000) OPTIONAL,
///     radius-max  INTEGER(1..1500000) OPTIONAL,
///     ...
/// }
/// ```
///
/// The radius is given in meters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CircularArea {
    pub coordinate: Coordinate,
    pub radius: ConstrainedInt<1, 1_000_000>,
    pub radius_min: Option<ConstrainedInt<1, 1_000_000>>,
    pub radius_max: Option<ConstrainedInt<1, 1_500_000>>,
}

impl CircularArea {
    /// Creates a circular area without the optional radius bounds.
    pub fn new(
        coordinate: Coordinate, radius: i64
    ) -> Result<Self, EncodeError> {
        Ok(CircularArea {
            coordinate,
            radius: ConstrainedInt::new(radius)?,
            radius_min: None,
            radius_max: None,
        })
    }
}

impl Asn1Object for CircularArea {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        SequencePreamble::encode(target, true, &[
            self.radius_min.is_some(),
            self.radius_max.is_some(),
        ])?;
        self.coordinate.encode_per(target)?;
        self.radius.encode_per(target)?;
        encode_optional(self.radius_min.as_ref(), target)?;
        encode_optional(self.radius_max.as_ref(), target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, true, 2)?;
        self.coordinate.decode_per(source)?;
        self.radius.decode_per(source)?;
        self.radius_min = preamble.take_optional(0, source)?;
        self.radius_max = preamble.take_optional(1, source)?;
        preamble.skip_extensions(source)?;
        Ok(())
    }
}


//------------ EllipticalArea ------------------------------------------------

/// An ellipse around a point.
///
/// ```text
/// EllipticalArea ::= SEQUENCE {
///     coordinate       Coordinate,
///     semiMajor        INTEGER(1..1000000),
///     semiMajor-min    INTEGER(1..1000000) OPTIONAL,
///     semiMajor-max    INTEGER(1..1500000) OPTIONAL,
///     semiMinor        INTEGER(1..1000000),
///     semiMinor-min    INTEGER(1..1000000) OPTIONAL,
///     semiMinor-max    INTEGER(1..1500000) OPTIONAL,
///     angle            INTEGER(0..179),
///     ...
/// }
/// ```
///
/// The axes are given in meters, the angle in degrees clockwise from
/// north.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EllipticalArea {
    pub coordinate: Coordinate,
    pub semi_major: ConstrainedInt<1, 1_000_000>,
    pub semi_major_min: Option<ConstrainedInt<1, 1_000_000>>,
    pub semi_major_max: Option<ConstrainedInt<1, 1_500_000>>,
    pub semi_minor: ConstrainedInt<1, 1_000_000>,
    pub semi_minor_min: Option<ConstrainedInt<1, 1_000_000>>,
    pub semi_minor_max: Option<ConstrainedInt<1, 1_500_000>>,
    pub angle: ConstrainedInt<0, 179>,
}

impl Asn1Object for EllipticalArea {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        SequencePreamble::encode(target, true, &[
            self.semi_major_min.is_some(),
            self.semi_major_max.is_some(),
            self.semi_minor_min.is_some(),
            self.semi_minor_max.is_some(),
        ])?;
        self.coordinate.encode_per(target)?;
        self.semi_major.encode_per(target)?;
        encode_optional(self.semi_major_min.as_ref(), target)?;
        encode_optional(self.semi_major_max.as_ref(), target)?;
        self.semi_minor.encode_per(target)?;
        encode_optional(self.semi_minor_min.as_ref(), target)?;
        encode_optional(self.semi_minor_max.as_ref(), target)?;
        self.angle.encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, true, 4)?;
        self.coordinate.decode_per(source)?;
        self.semi_major.decode_per(source)?;
        self.semi_major_min = preamble.take_optional(0, source)?;
        self.semi_major_max = preamble.take_optional(1, source)?;
        self.semi_minor.decode_per(source)?;
        self.semi_minor_min = preamble.take_optional(2, source)?;
        self.semi_minor_max = preamble.take_optional(3, source)?;
        self.angle.decode_per(source)?;
        preamble.skip_extensions(source)?;
        Ok(())
    }
}


//------------ PolygonArea ---------------------------------------------------

/// An area bounded by a polygon.
///
/// ```text
/// PolygonArea ::= SEQUENCE {
///     polygonDescription  PolygonDescription,
///     polygonHysteresis   INTEGER(1..100000) OPTIONAL,
///     ...
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PolygonArea {
    pub polygon_description: PolygonDescription,
    pub polygon_hysteresis: Option<ConstrainedInt<1, 100_000>>,
}

impl Asn1Object for PolygonArea {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        SequencePreamble::encode(
            target, true, &[self.polygon_hysteresis.is_some()]
        )?;
        self.polygon_description.encode_per(target)?;
        encode_optional(self.polygon_hysteresis.as_ref(), target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        let preamble = SequencePreamble::take_from(source, true, 1)?;
        self.polygon_description.decode_per(source)?;
        self.polygon_hysteresis = preamble.take_optional(0, source)?;
        preamble.skip_extensions(source)?;
        Ok(())
    }
}


//------------ PolygonDescription --------------------------------------------

crate::sequence_of! {
    /// The corners of a polygon.
    ///
    /// ```text
    /// PolygonDescription ::= SEQUENCE (SIZE (3..15)) OF Coordinate
    /// ```
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct PolygonDescription: SEQUENCE (SIZE (3..15)) OF Coordinate;
}


//------------ Coordinate ----------------------------------------------------

/// A point on the WGS-84 ellipsoid.
///
/// ```text
/// Coordinate ::= SEQUENCE {
///     latitudeSign  ENUMERATED {north, south},
///     latitude      INTEGER(0..8388607),
///     longitude     INTEGER(-8388608..8388607)
/// }
/// ```
///
/// The latitude is scaled so that 2^23 corresponds to 90 degrees, the
/// longitude so that 2^24 corresponds to 360 degrees.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Coordinate {
    pub latitude_sign: LatitudeSign,
    pub latitude: ConstrainedInt<0, 8_388_607>,
    pub longitude: ConstrainedInt<-8_388_608, 8_388_607>,
}

impl Coordinate {
    /// Creates a coordinate, checking latitude and longitude.
    pub fn new(
        latitude_sign: LatitudeSign, latitude: i64, longitude: i64
    ) -> Result<Self, EncodeError> {
        Ok(Coordinate {
            latitude_sign,
            latitude: ConstrainedInt::new(latitude)?,
            longitude: ConstrainedInt::new(longitude)?,
        })
    }
}

impl Asn1Object for Coordinate {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        self.latitude_sign.encode_per(target)?;
        self.latitude.encode_per(target)?;
        self.longitude.encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.latitude_sign.decode_per(source)?;
        self.latitude.decode_per(source)?;
        self.longitude.decode_per(source)
    }
}


//------------ LatitudeSign --------------------------------------------------

/// The hemisphere of a latitude.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LatitudeSign {
    #[default]
    North,
    South,
}

impl Asn1Object for LatitudeSign {
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        let index = match *self {
            LatitudeSign::North => 0,
            LatitudeSign::South => 1,
        };
        encode_enumerated(target, index, 2, false)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        *self = if decode_enumerated(source, 2, false)? == 0 {
            LatitudeSign::North
        }
        else {
            LatitudeSign::South
        };
        Ok(())
    }
}


//============ Tests =========================================================
