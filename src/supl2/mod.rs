//! Types of the SUPL 2.0 ULP schemas.
//!
//! The types in this module mirror the ASN.1 definitions of the OMA
//! User Plane Location Protocol, version 2. Each type implements
//! [`Asn1Object`][crate::Asn1Object] and can therefore be encoded and
//! decoded in both PER variants:
//!
//! ```
//! use supl_per::Asn1Object;
//! use supl_per::supl2::{
//!     CircularArea, Coordinate, GeographicTargetArea,
//!     GeographicTargetAreaList, LatitudeSign,
//! };
//!
//! let mut list = GeographicTargetAreaList::default();
//! list.push(GeographicTargetArea::CircularArea(CircularArea::new(
//!     Coordinate::new(LatitudeSign::North, 4_194_304, -1_000).unwrap(),
//!     2_500
//! ).unwrap()));
//!
//! let octets = list.to_per_unaligned_vec().unwrap();
//! let decoded = GeographicTargetAreaList::from_per_unaligned(
//!     &octets
//! ).unwrap();
//! assert_eq!(decoded, list);
//! ```
//!
//! Only the root components of extensible types are supported. Extension
//! additions of SEQUENCE types are skipped when decoding.

pub use self::area::{
    CircularArea, Coordinate, EllipticalArea, GeographicTargetArea,
    GeographicTargetAreaList, LatitudeSign, PolygonArea, PolygonDescription,
};
pub use self::rrlp::{CnavClockModel, InterSignalCorrection};
pub use self::session::{
    Fqdn, FqdnCharSet, IpAddress, SessionId, SessionInformation,
    SessionList, SetId, SetSessionId, SlpAddress, SlpSessionId,
};


//------------ Constants -----------------------------------------------------

/// The largest number of sessions in a [`SessionList`].
pub const MAX_NUM_SESSIONS: usize = 64;

/// The largest number of areas in a [`GeographicTargetAreaList`].
pub const MAX_NUM_GEO_AREA: usize = 32;


//------------ Modules -------------------------------------------------------

mod area;
mod rrlp;
mod session;
