use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, ToSocketAddrs};
use tracing::{debug, warn};

use crate::domain::{Color, DrawCall, DrawSink, RenderError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9111;

// One JSON object per primitive; the viewer reads them back-to-back.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RewindMessage<'a> {
    Options {
        #[serde(skip_serializing_if = "Option::is_none")]
        layer: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        permanent: Option<bool>,
    },
    Polyline {
        points: [f64; 4],
        color: u32,
    },
    Circle {
        p: [f64; 2],
        r: f64,
        color: u32,
        fill: bool,
    },
    Rectangle {
        tl: [f64; 2],
        br: [f64; 2],
        color: u32,
        fill: bool,
    },
    Popup {
        p: [f64; 2],
        r: f64,
        text: &'a str,
    },
    Message {
        message: &'a str,
    },
    End,
}

impl<'a> From<&'a DrawCall> for RewindMessage<'a> {
    fn from(call: &'a DrawCall) -> Self {
        match call {
            DrawCall::Options { layer, permanent } => RewindMessage::Options {
                layer: *layer,
                permanent: *permanent,
            },
            DrawCall::Line { from, to, color } => RewindMessage::Polyline {
                points: [from.x, from.y, to.x, to.y],
                color: rgb(*color),
            },
            DrawCall::Circle {
                center,
                radius,
                color,
                fill,
            } => RewindMessage::Circle {
                p: [center.x, center.y],
                r: *radius,
                color: rgb(*color),
                fill: *fill,
            },
            DrawCall::Rectangle {
                top_left,
                bottom_right,
                color,
                fill,
            } => RewindMessage::Rectangle {
                tl: [top_left.x, top_left.y],
                br: [bottom_right.x, bottom_right.y],
                color: rgb(*color),
                fill: *fill,
            },
            DrawCall::Popup {
                center,
                radius,
                text,
            } => RewindMessage::Popup {
                p: [center.x, center.y],
                r: *radius,
                text,
            },
            DrawCall::Message(message) => RewindMessage::Message { message },
            DrawCall::EndFrame => RewindMessage::End,
        }
    }
}

fn rgb(color: Color) -> u32 {
    color.0
}

/// Serializes a frame into the viewer's concatenated-JSON wire form.
pub fn encode_frame(calls: &[DrawCall]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(calls.len() * 64);
    for call in calls {
        serde_json::to_writer(&mut buf, &RewindMessage::from(call))?;
    }
    Ok(buf)
}

// TCP client for the Rewind viewer. A failed write marks the client as
// disconnected; later frames are dropped without touching the socket.
pub struct RewindClient {
    stream: Option<TcpStream>,
}

impl RewindClient {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, RenderError> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self {
            stream: Some(stream),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

#[async_trait]
impl DrawSink for RewindClient {
    async fn draw_frame(&mut self, calls: &[DrawCall]) -> Result<(), RenderError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(RenderError::Disconnected);
        };

        let bytes = encode_frame(calls)?;
        if let Err(error) = stream.write_all(&bytes).await {
            warn!(%error, "viewer connection lost; drawing disabled");
            self.stream = None;
            return Err(error.into());
        }
        Ok(())
    }

    async fn shutdown(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(error) = stream.shutdown().await {
                debug!(%error, "viewer socket shutdown failed");
            }
        }
    }
}
