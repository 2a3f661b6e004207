/// Implementation of particular cases of elliptic curves.
pub mod curves;
/// `AffinePoint` (primary) and `ShortWeierstrassProjectivePoint` (alternate)
/// point representations and their group law.
pub mod point;
/// Common behaviour for Elliptic curves.
pub mod traits;
