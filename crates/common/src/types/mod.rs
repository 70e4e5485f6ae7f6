use serde::{Deserialize, Serialize};

pub const STATUS_UP: &str = "UP";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ComponentHealth {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthComponents {
    pub db: ComponentHealth,
    #[serde(rename = "diskSpace")]
    pub disk_space: ComponentHealth,
}

/// Health payload in the actuator-style shape: an overall status plus
/// per-component statuses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub components: HealthComponents,
}

impl HealthReport {
    /// Fixed report with every component marked up. Not backed by real probes.
    pub fn all_up() -> Self {
        let up = || ComponentHealth { status: STATUS_UP.to_string() };
        Self {
            status: STATUS_UP.to_string(),
            components: HealthComponents { db: up(), disk_space: up() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_up_matches_wire_shape() {
        let v = serde_json::to_value(HealthReport::all_up()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "status": "UP",
                "components": {
                    "db": { "status": "UP" },
                    "diskSpace": { "status": "UP" }
                }
            })
        );
    }
}
