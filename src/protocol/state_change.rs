//! Tags of the session-state-change records embedded in an OK packet.
//!
//! Tags outside this set must still be skippable: every record carries a
//! self-describing length prefix, so a newer server never breaks an older
//! decoder.
//!
//! <https://mariadb.com/kb/en/ok_packet/#session-change-info>

/// system variable change
pub const SYSTEM_VARIABLES: u8 = 0;

/// default schema change
pub const SCHEMA: u8 = 1;

/// "state change" flag
pub const STATE_CHANGE: u8 = 2;

/// GTID change
pub const GTIDS: u8 = 3;

/// transaction characteristics change
pub const TRANSACTION_CHARACTERISTICS: u8 = 4;

/// transaction state change
pub const TRANSACTION_STATE: u8 = 5;

/// catalog change
pub const CATALOG: u8 = 6;
