//! Wake-on-LAN support
//!
//! A box in deep standby drops off the web interface; the only way back is a
//! magic packet addressed to its LAN hardware address.

use std::fmt;
use std::net::{SocketAddr, UdpSocket};
use std::str::FromStr;

use tracing::debug;

use crate::DeviceError;

/// Six-byte hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 6] {
        self.0
    }

    /// 6 x 0xFF followed by the address repeated 16 times
    pub fn magic_packet(&self) -> [u8; 102] {
        let mut packet = [0xFF; 102];
        for chunk in packet[6..].chunks_exact_mut(6) {
            chunk.copy_from_slice(&self.0);
        }
        packet
    }
}

impl FromStr for MacAddress {
    type Err = DeviceError;

    /// Accepts `00:09:34:1a:2b:3c`, `00-09-34-1A-2B-3C` and `0009341a2b3c`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex: String = s
            .trim()
            .chars()
            .filter(|c| *c != ':' && *c != '-' && *c != '.')
            .collect();

        if hex.len() != 12 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DeviceError::InvalidMacAddress(s.to_string()));
        }

        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| DeviceError::InvalidMacAddress(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", a, b, c, d, e, g)
    }
}

/// Capability to wake a powered-down box
///
/// [`MagicPacketSender`] is the real implementation; tests inject a recorder.
pub trait WakeSignal: Send {
    fn send(&self, mac: &MacAddress) -> Result<(), DeviceError>;
}

/// Sends wake-on-LAN magic packets over UDP broadcast
#[derive(Debug, Clone)]
pub struct MagicPacketSender {
    target: SocketAddr,
}

impl MagicPacketSender {
    /// Broadcast to 255.255.255.255 on the discard port
    pub fn new() -> Self {
        Self {
            target: SocketAddr::from(([255, 255, 255, 255], 9)),
        }
    }

    /// Send to a specific address, e.g. a subnet broadcast
    pub fn with_target(target: SocketAddr) -> Self {
        Self { target }
    }
}

impl Default for MagicPacketSender {
    fn default() -> Self {
        Self::new()
    }
}

impl WakeSignal for MagicPacketSender {
    fn send(&self, mac: &MacAddress) -> Result<(), DeviceError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DeviceError::Wake(format!("Failed to bind UDP socket: {}", e)))?;

        socket
            .set_broadcast(true)
            .map_err(|e| DeviceError::Wake(format!("Failed to enable broadcast: {}", e)))?;

        socket
            .send_to(&mac.magic_packet(), self.target)
            .map_err(|e| DeviceError::Wake(format!("Failed to send magic packet: {}", e)))?;

        debug!(mac = %mac, target = %self.target, "sent magic packet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colon_separated() {
        let mac: MacAddress = "00:09:34:1a:2b:3c".parse().unwrap();
        assert_eq!(mac.bytes(), [0x00, 0x09, 0x34, 0x1a, 0x2b, 0x3c]);
    }

    #[test]
    fn test_parse_dash_separated_and_bare() {
        let dashed: MacAddress = "00-09-34-1A-2B-3C".parse().unwrap();
        let bare: MacAddress = "0009341a2b3c".parse().unwrap();
        assert_eq!(dashed, bare);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("00:09:34".parse::<MacAddress>().is_err());
        assert!("zz:09:34:1a:2b:3c".parse::<MacAddress>().is_err());
        assert!("".parse::<MacAddress>().is_err());
    }

    #[test]
    fn test_display_round_trips_lowercase() {
        let mac: MacAddress = "00:09:34:1A:2B:3C".parse().unwrap();
        assert_eq!(mac.to_string(), "00:09:34:1a:2b:3c");
    }

    #[test]
    fn test_magic_packet_layout() {
        let mac = MacAddress::new([1, 2, 3, 4, 5, 6]);
        let packet = mac.magic_packet();

        assert_eq!(&packet[..6], &[0xFF; 6]);
        for repetition in packet[6..].chunks(6) {
            assert_eq!(repetition, &[1, 2, 3, 4, 5, 6]);
        }
        assert_eq!(packet[6..].len() / 6, 16);
    }

    #[test]
    fn test_sender_to_loopback() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let sender = MagicPacketSender::with_target(receiver.local_addr().unwrap());
        let mac = MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);

        sender.send(&mac).unwrap();

        let mut buffer = [0u8; 128];
        let (len, _) = receiver.recv_from(&mut buffer).unwrap();
        assert_eq!(&buffer[..len], &mac.magic_packet()[..]);
    }
}
