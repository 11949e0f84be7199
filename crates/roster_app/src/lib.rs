//! Roster app: wires the pure core to the fetch engine and the notifier.
pub mod platform;
