/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only drives infrastructure, so all ports are
/// outbound (driven) ports.
pub mod outbound;
