use crate::constants::DEFAULT_MSOP_PORT;
use crate::error::MsopError;
use msop_data::{FieldOfView, ReturnSelection};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Settings of one driver instance.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Address the MSOP socket binds to.
    pub listen_addr: SocketAddr,
    /// Measurements outside this window are never stored.
    pub fov: FieldOfView,
    pub return_selection: ReturnSelection,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_MSOP_PORT),
            fov: FieldOfView::default(),
            return_selection: ReturnSelection::default(),
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), MsopError> {
        let in_range = |degree: f64| degree.is_finite() && (0. ..=360.).contains(&degree);
        if !in_range(self.fov.start_deg) || !in_range(self.fov.end_deg) {
            return Err(MsopError::InvalidFieldOfView {
                start: self.fov.start_deg,
                end: self.fov.end_deg,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DriverConfig::default();
        assert_eq!(config.listen_addr.port(), 6699);
        assert_eq!(config.fov, FieldOfView::new(0., 360.));
        assert_eq!(config.return_selection, ReturnSelection::Strongest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_fov() {
        let mut config = DriverConfig::default();
        config.fov = FieldOfView::new(315., 45.);
        assert!(config.validate().is_ok());

        for (start, end) in [(-1., 90.), (0., 360.5), (f64::NAN, 90.), (0., f64::INFINITY)] {
            config.fov = FieldOfView::new(start, end);
            assert!(matches!(
                config.validate(),
                Err(MsopError::InvalidFieldOfView { .. })
            ));
        }
    }
}
