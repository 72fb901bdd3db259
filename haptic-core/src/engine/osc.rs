use std::net::UdpSocket;
use std::time::{SystemTime, UNIX_EPOCH};

use rosc::{OscBundle, OscMessage, OscPacket, OscTime, OscType};

use super::{EngineError, EngineStatus, FeedbackEngine, Pattern};
use crate::events::{EffectEvent, EventParam};

/// Thin OSC/UDP client for the renderer process.
struct OscClient {
    socket: UdpSocket,
    server_addr: String,
}

impl OscClient {
    fn new(server_addr: &str) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        Ok(Self {
            socket,
            server_addr: server_addr.to_string(),
        })
    }

    fn send_message(&self, addr: &str, args: Vec<OscType>) -> std::io::Result<()> {
        let msg = OscPacket::Message(OscMessage {
            addr: addr.to_string(),
            args,
        });
        let buf = rosc::encoder::encode(&msg)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        self.socket.send_to(&buf, &self.server_addr)?;
        Ok(())
    }

    /// Send multiple messages in a single timestamped bundle.
    fn send_bundle(&self, messages: Vec<OscMessage>, time: OscTime) -> std::io::Result<()> {
        let content = messages.into_iter().map(OscPacket::Message).collect();
        let bundle = OscPacket::Bundle(OscBundle {
            timetag: time,
            content,
        });
        let buf = rosc::encoder::encode(&bundle)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        self.socket.send_to(&buf, &self.server_addr)?;
        Ok(())
    }
}

/// OSC timetags use the NTP epoch (1900-01-01).
const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

fn osc_time_from_now(offset_secs: f64) -> OscTime {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let total_secs = now.as_secs_f64() + offset_secs;
    let secs = total_secs as u64 + NTP_UNIX_OFFSET;
    let frac = (total_secs.fract() * (u32::MAX as f64)) as u32;
    OscTime {
        seconds: secs as u32,
        fractional: frac,
    }
}

/// Reject non-finite parameter values before they reach the renderer.
pub(crate) fn validate_events(events: &[EffectEvent]) -> Result<(), EngineError> {
    for event in events {
        for (param, value) in event.params() {
            if !value.is_finite() {
                return Err(EngineError::CompileFailure(format!(
                    "non-finite value for {}",
                    param.wire_name()
                )));
            }
        }
    }
    Ok(())
}

fn push_params(args: &mut Vec<OscType>, params: &[(EventParam, f32)]) {
    for (param, value) in params {
        args.push(OscType::String(param.wire_name().to_string()));
        args.push(OscType::Float(*value));
    }
}

/// The production `FeedbackEngine`: speaks OSC over UDP to the
/// host-controlled haptic/audio renderer.
///
/// The socket is bound lazily on `start`, so constructing the engine never
/// touches the network. `start` is idempotent.
pub struct OscEngine {
    client: Option<OscClient>,
    server_addr: String,
    status: EngineStatus,
}

impl OscEngine {
    pub fn new(server_addr: &str) -> Self {
        Self {
            client: None,
            server_addr: server_addr.to_string(),
            status: EngineStatus::Stopped,
        }
    }
}

impl FeedbackEngine for OscEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        if self.client.is_some() {
            return Ok(());
        }

        let client = match OscClient::new(&self.server_addr) {
            Ok(c) => c,
            Err(e) => {
                self.status = EngineStatus::Error;
                return Err(EngineError::StartFailure(e.to_string()));
            }
        };

        // /engine/start resumes hardware actuation on the renderer side.
        if let Err(e) = client.send_message("/engine/start", vec![]) {
            self.status = EngineStatus::Error;
            return Err(EngineError::StartFailure(e.to_string()));
        }

        self.client = Some(client);
        self.status = EngineStatus::Running;
        Ok(())
    }

    fn compile(&self, events: &[EffectEvent]) -> Result<Pattern, EngineError> {
        validate_events(events)?;

        let mut messages = Vec::with_capacity(events.len());
        for event in events {
            match event {
                EffectEvent::Haptic {
                    params,
                    relative_time,
                } => {
                    let mut args: Vec<OscType> = vec![OscType::Float(*relative_time)];
                    push_params(&mut args, params);
                    messages.push(OscMessage {
                        addr: "/pattern/haptic".to_string(),
                        args,
                    });
                }
                EffectEvent::Audio {
                    params,
                    relative_time,
                    duration,
                } => {
                    let mut args: Vec<OscType> =
                        vec![OscType::Float(*relative_time), OscType::Float(*duration)];
                    push_params(&mut args, params);
                    messages.push(OscMessage {
                        addr: "/pattern/audio".to_string(),
                        args,
                    });
                }
            }
        }

        Ok(Pattern { messages })
    }

    fn play(&mut self, pattern: &Pattern, start_time: f32) -> Result<(), EngineError> {
        if pattern.is_empty() {
            return Ok(());
        }
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| EngineError::PlaybackFailure("engine not started".to_string()))?;

        client
            .send_bundle(
                pattern.messages.clone(),
                osc_time_from_now(start_time as f64),
            )
            .map_err(|e| EngineError::PlaybackFailure(e.to_string()))
    }

    fn status(&self) -> EngineStatus {
        self.status
    }
}
