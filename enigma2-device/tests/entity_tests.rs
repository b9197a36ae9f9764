//! MediaPlayer property mapping and command delegation

use std::time::Duration;

use enigma2_device::{DeviceClient, DeviceConfig, MediaPlayer, MagicPacketSender, PlayerState};
use mockito::{Matcher, Server, ServerGuard};
use rstest::rstest;

const ABOUT_XML: &str = "<e2abouts><e2about><e2webifversion>1.4.9</e2webifversion><e2lanmac>00:09:34:1a:2b:3c</e2lanmac></e2about></e2abouts>";
const POWER_ON_XML: &str = "<e2powerstate><e2instandby>False</e2instandby></e2powerstate>";
const SUBSERVICES_XML: &str = "<e2servicelist><e2service><e2servicereference>1:0:19:1B1D:802:2:11A0000:0:0:0:</e2servicereference><e2servicename>BBC ONE</e2servicename></e2service></e2servicelist>";

fn volume_xml(current: u8, muted: bool) -> String {
    format!(
        "<e2volume><e2current>{}</e2current><e2ismuted>{}</e2ismuted></e2volume>",
        current,
        if muted { "True" } else { "False" }
    )
}

fn config_for(server: &ServerGuard) -> DeviceConfig {
    let addr = server.socket_address();
    DeviceConfig::new(addr.ip().to_string())
        .with_port(addr.port())
        .with_timeout(Duration::from_secs(2))
        .with_name("Living Room")
}

/// Box that is on, tuned to BBC ONE, at `volume`
fn running_box(volume: u8, muted: bool) -> ServerGuard {
    let mut server = Server::new();
    server.mock("GET", "/web/about").with_body(ABOUT_XML).create();
    server.mock("GET", "/web/powerstate").with_body(POWER_ON_XML).create();
    server
        .mock("GET", "/web/vol")
        .with_body(volume_xml(volume, muted))
        .create();
    server
        .mock("GET", "/web/subservices")
        .with_body(SUBSERVICES_XML)
        .create();
    server
}

fn updated_player(config: DeviceConfig) -> MediaPlayer {
    let device = DeviceClient::with_wake(config.clone(), Box::new(MagicPacketSender::new())).unwrap();
    let mut player = MediaPlayer::from_device(config.name, config.use_channel_icon, device);
    player.update().unwrap();
    player
}

#[test]
fn test_properties_of_running_box() {
    let server = running_box(37, false);
    let player = updated_player(config_for(&server));

    assert_eq!(player.name(), "Living Room");
    assert_eq!(player.unique_id(), Some("00:09:34:1a:2b:3c"));
    assert_eq!(player.state(), PlayerState::On);
    assert!(player.available());
    assert_eq!(player.volume_level(), Some(0.37));
    assert!(!player.is_volume_muted());
    assert_eq!(player.media_title(), Some("BBC ONE"));
    assert_eq!(player.media_channel(), Some("BBC ONE"));
    assert_eq!(
        player.media_content_id(),
        Some("1:0:19:1B1D:802:2:11A0000:0:0:0:")
    );
    assert_eq!(player.media_content_type(), "tvshow");
}

#[test]
fn test_properties_in_standby() {
    let mut server = Server::new();
    server.mock("GET", "/web/about").with_body(ABOUT_XML).create();
    server
        .mock("GET", "/web/powerstate")
        .with_body("<e2powerstate><e2instandby>true</e2instandby></e2powerstate>")
        .create();

    let player = updated_player(config_for(&server));

    assert_eq!(player.state(), PlayerState::Off);
    assert!(player.available());
    assert_eq!(player.volume_level(), None);
    assert_eq!(player.media_title(), None);
    assert_eq!(player.media_image_url(), None);
}

#[test]
fn test_media_image_url_screen_grab() {
    let server = running_box(20, false);
    let player = updated_player(config_for(&server));

    assert_eq!(
        player.media_image_url(),
        Some(format!("{}/grab?format=jpg&r=720", player.device().base_url()))
    );
}

#[test]
fn test_media_image_url_picon() {
    let server = running_box(20, false);
    let player = updated_player(config_for(&server).with_channel_icon(true));

    assert_eq!(
        player.media_image_url(),
        Some(format!(
            "{}/picon/1_0_19_1B1D_802_2_11A0000_0_0_0.png",
            player.device().base_url()
        ))
    );
}

#[rstest]
#[case::up_from_middle(50, true, "set55")]
#[case::up_clamped(98, true, "set100")]
#[case::down_from_middle(50, false, "set45")]
#[case::down_clamped(3, false, "set0")]
fn test_volume_step(#[case] start: u8, #[case] up: bool, #[case] expected: &str) {
    let mut server = running_box(start, false);
    let set = server
        .mock("GET", format!("/web/vol?set={}", expected).as_str())
        .with_body(volume_xml(start, false))
        .create();
    let mut player = updated_player(config_for(&server));

    if up {
        player.volume_up().unwrap();
    } else {
        player.volume_down().unwrap();
    }

    set.assert();
}

#[rstest]
#[case(0.0, "set0")]
#[case(0.5, "set50")]
#[case(0.37, "set37")]
#[case(1.0, "set100")]
fn test_set_volume_level_scales(#[case] level: f32, #[case] expected: &str) {
    let mut server = running_box(10, false);
    let set = server
        .mock("GET", format!("/web/vol?set={}", expected).as_str())
        .with_body(volume_xml(10, false))
        .create();
    let mut player = updated_player(config_for(&server));

    assert!(player.set_volume_level(level).unwrap());
    set.assert();
}

#[rstest]
#[case::mute_unmuted(false, true, 1)]
#[case::unmute_muted(true, false, 1)]
#[case::mute_already_muted(true, true, 0)]
#[case::unmute_unmuted(false, false, 0)]
fn test_mute_volume_only_toggles_on_change(
    #[case] muted: bool,
    #[case] requested: bool,
    #[case] toggles: usize,
) {
    let mut server = running_box(30, muted);
    let toggle = server
        .mock("GET", "/web/vol?set=mute")
        .with_body(volume_xml(30, !muted))
        .expect(toggles)
        .create();
    let mut player = updated_player(config_for(&server));

    assert!(player.mute_volume(requested).unwrap());
    toggle.assert();
}

#[test]
fn test_turn_on_and_off_delegate() {
    let mut server = running_box(30, false);
    let on = server
        .mock("GET", "/web/powerstate?newstate=4")
        .with_body(POWER_ON_XML)
        .create();
    let off = server
        .mock("GET", "/web/powerstate?newstate=5")
        .with_body("<e2powerstate><e2instandby>true</e2instandby></e2powerstate>")
        .create();
    let mut player = updated_player(config_for(&server));

    player.turn_off().unwrap();
    assert_eq!(player.state(), PlayerState::Off);
    player.turn_on().unwrap();
    assert_eq!(player.state(), PlayerState::On);

    on.assert();
    off.assert();
}

#[test]
fn test_unavailable_when_offline() {
    let mut server = Server::new();
    server.mock("GET", "/web/about").with_body(ABOUT_XML).create();
    server
        .mock("GET", Matcher::Exact("/web/powerstate".to_string()))
        .with_status(503)
        .create();

    let player = updated_player(config_for(&server));

    assert!(!player.available());
    assert_eq!(player.state(), PlayerState::Off);
    assert_eq!(player.volume_level(), None);
    assert_eq!(player.unique_id(), Some("00:09:34:1a:2b:3c"));
}

#[rstest]
#[case::up(true)]
#[case::down(false)]
fn test_volume_step_in_standby_sends_nothing(#[case] up: bool) {
    let mut server = Server::new();
    server.mock("GET", "/web/about").with_body(ABOUT_XML).create();
    server
        .mock("GET", "/web/powerstate")
        .with_body("<e2powerstate><e2instandby>true</e2instandby></e2powerstate>")
        .create();
    let set = server
        .mock("GET", Matcher::Regex(r"^/web/vol\?set=".to_string()))
        .expect(0)
        .create();
    let mut player = updated_player(config_for(&server));

    let sent = if up {
        player.volume_up().unwrap()
    } else {
        player.volume_down().unwrap()
    };

    assert!(!sent);
    set.assert();
}

#[test]
fn test_media_program_reads_current_event() {
    let mut server = running_box(30, false);
    server
        .mock("GET", "/web/getcurrent")
        .with_body(
            "<e2currentserviceinformation>\
               <e2service><e2servicereference>1:0:19:1B1D:802:2:11A0000:0:0:0:</e2servicereference><e2servicename>BBC ONE</e2servicename></e2service>\
               <e2eventlist>\
                 <e2event><e2eventtitle>Panorama</e2eventtitle><e2eventdescription>Investigations</e2eventdescription><e2eventstart>1700000000</e2eventstart><e2eventduration>2400</e2eventduration></e2event>\
               </e2eventlist>\
             </e2currentserviceinformation>",
        )
        .create();
    let mut player = updated_player(config_for(&server));

    let program = player.media_program().unwrap().unwrap();

    assert_eq!(program.title, "Panorama");
    assert_eq!(program.description.as_deref(), Some("Investigations"));
    assert_eq!(program.end(), Some(1_700_002_400));
}
