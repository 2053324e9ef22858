use crate::error::MessagingError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest frame accepted in either direction (1 MiB).
pub const MAX_FRAME_LEN: usize = 1024 * 1024;

/// Reads one frame. Returns `None` on a clean end of stream between frames.
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Vec<u8>>, MessagingError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; 4];
    match reader.read_exact(&mut header).await {
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err.into()),
    }

    let len = u32::from_ne_bytes(header) as usize;
    if len > MAX_FRAME_LEN {
        return Err(MessagingError::FrameTooLarge(len));
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    Ok(Some(payload))
}

/// Writes one frame and flushes the writer.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<(), MessagingError>
where
    W: AsyncWrite + Unpin,
{
    if payload.len() > MAX_FRAME_LEN {
        return Err(MessagingError::FrameTooLarge(payload.len()));
    }

    let len = payload.len() as u32;
    writer.write_all(&len.to_ne_bytes()).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads and decodes one JSON message.
pub async fn read_message<R, T>(reader: &mut R) -> Result<Option<T>, MessagingError>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    match read_frame(reader).await? {
        Some(payload) => Ok(Some(serde_json::from_slice(&payload)?)),
        None => Ok(None),
    }
}

/// Encodes and writes one JSON message.
pub async fn write_message<W, T>(writer: &mut W, message: &T) -> Result<(), MessagingError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let payload = serde_json::to_vec(message)?;
    write_frame(writer, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::Request;

    #[tokio::test]
    async fn frame_has_length_prefix() {
        let mut buffer = Vec::new();
        write_message(&mut buffer, &Request::Ping).await.unwrap();

        let body = br#"{"action":"ping"}"#;
        assert_eq!(&buffer[..4], &(body.len() as u32).to_ne_bytes());
        assert_eq!(&buffer[4..], body);

        let mut reader = buffer.as_slice();
        let request: Option<Request> = read_message(&mut reader).await.unwrap();
        assert_eq!(request, Some(Request::Ping));
        let end: Option<Request> = read_message(&mut reader).await.unwrap();
        assert_eq!(end, None);
    }

    #[tokio::test]
    async fn oversized_frame_is_rejected() {
        let header = ((MAX_FRAME_LEN + 1) as u32).to_ne_bytes();
        let mut reader = &header[..];
        let err = read_frame(&mut reader).await.unwrap_err();
        assert!(matches!(err, MessagingError::FrameTooLarge(_)));
    }

    #[tokio::test]
    async fn truncated_payload_is_an_error() {
        let mut buffer = 10u32.to_ne_bytes().to_vec();
        buffer.extend_from_slice(b"{}");
        let mut reader = buffer.as_slice();
        let err = read_frame(&mut reader).await.unwrap_err();
        assert!(matches!(err, MessagingError::Io(_)));
    }
}
