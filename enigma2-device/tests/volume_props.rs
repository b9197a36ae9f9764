//! Property tests for volume commands

use std::time::Duration;

use enigma2_device::{DeviceClient, DeviceConfig, MagicPacketSender};
use mockito::Server;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn set_volume_sends_exactly_one_request(volume in 0u8..=100) {
        let mut server = Server::new();
        let set = server
            .mock("GET", format!("/web/vol?set=set{}", volume).as_str())
            .with_body(format!(
                "<e2volume><e2current>{}</e2current><e2ismuted>False</e2ismuted></e2volume>",
                volume
            ))
            .expect(1)
            .create();

        let addr = server.socket_address();
        let config = DeviceConfig::new(addr.ip().to_string())
            .with_port(addr.port())
            .with_timeout(Duration::from_secs(2));
        let mut device = DeviceClient::with_wake(config, Box::new(MagicPacketSender::new())).unwrap();

        prop_assert!(device.set_volume(volume).unwrap());
        set.assert();
        prop_assert_eq!(device.state().volume, Some(volume));
    }

    #[test]
    fn set_volume_above_range_is_rejected(volume in 101u8..=u8::MAX) {
        let config = DeviceConfig::new("127.0.0.1")
            .with_port(1)
            .with_timeout(Duration::from_secs(1));
        let mut device = DeviceClient::with_wake(config, Box::new(MagicPacketSender::new())).unwrap();

        prop_assert!(device.set_volume(volume).is_err());
        prop_assert!(device.is_offline());
    }
}
