/// Name and driver of a Docker network, decoupled from the daemon's
/// API types. Plain immutable value; an empty driver string is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Network name, e.g. `bridge`, `frontend_net`.
    pub name: String,

    /// Driver type, e.g. `bridge`, `host`, `overlay`, `macvlan`.
    pub driver: String,
}

impl NetworkInfo {
    pub fn new(name: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: driver.into(),
        }
    }
}
