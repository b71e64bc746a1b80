//! Transport mode for reaching the messaging endpoint.

/// Wire-protocol variant used to reach the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportType {
    /// AMQP over plain TCP. The default when a connection string carries no
    /// `TransportType` field.
    #[default]
    AmqpTcp,
    /// AMQP tunnelled over web sockets.
    AmqpWebSockets,
}

impl TransportType {
    /// Parse a transport from its member name. Names match exactly; there is
    /// no case folding.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "AmqpTcp" => Some(Self::AmqpTcp),
            "AmqpWebSockets" => Some(Self::AmqpWebSockets),
            _ => None,
        }
    }

    /// Get the transport as its member name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmqpTcp => "AmqpTcp",
            Self::AmqpWebSockets => "AmqpWebSockets",
        }
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
