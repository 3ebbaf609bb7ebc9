//! Wire/domain translation.
//!
//! Inbound conversions copy allow-listed fields off wire records, so
//! anything the wire grows that the domain does not name simply never
//! crosses over. Outbound conversions build sparse payloads and turn
//! decimal prices back into the strings the remote API expects.

pub(crate) mod orders;
pub(crate) mod products;
