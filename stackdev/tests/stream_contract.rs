//! Byte-stream contract tests for the stack device
//!
//! These tests cover:
//! - LIFO order across the byte interface
//! - Resize semantics (grow, shrink, invalid values)
//! - Short reads and short writes
//! - Zero-padding of a trailing partial element

use stackdev::{Capacity, StackConfig, StackDevice, StackError, StreamError};

fn device(slots: usize) -> StackDevice {
    let _ = env_logger::builder().is_test(true).try_init();
    StackDevice::new(StackConfig::new(Capacity::new(slots))).unwrap()
}

fn encode(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

fn decode(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(4)
        .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[tokio::test]
async fn test_lifo_law_over_stream() -> anyhow::Result<()> {
    let device = device(16);
    let mut stream = device.open();
    let values: Vec<i32> = (0..16).map(|i| i * 1_000 - 7).collect();

    assert_eq!(stream.write(&encode(&values)).await?, 64);

    let mut buf = vec![0u8; 64];
    assert_eq!(stream.read(&mut buf).await?, 64);

    let mut expected = values.clone();
    expected.reverse();
    assert_eq!(decode(&buf), expected);
    Ok(())
}

#[tokio::test]
async fn test_default_device_has_eight_slots() -> anyhow::Result<()> {
    let device = StackDevice::new(StackConfig::default())?;
    let mut stream = device.open();

    assert_eq!(stream.write(&encode(&[0; 10])).await?, 32);
    assert_eq!(stream.state().await.len, 8);
    Ok(())
}

#[tokio::test]
async fn test_grow_after_push_preserves_order() -> anyhow::Result<()> {
    let device = device(3);
    let mut stream = device.open();
    stream.write(&encode(&[1, 2, 3])).await?;

    stream.set_capacity(10).await?;
    assert_eq!(stream.write(&encode(&[4])).await?, 4);

    let mut buf = [0u8; 16];
    assert_eq!(stream.read(&mut buf).await?, 16);
    assert_eq!(decode(&buf), [4, 3, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn test_shrink_keeps_oldest_elements() -> anyhow::Result<()> {
    let device = device(8);
    let mut stream = device.open();
    stream.write(&encode(&[10, 20, 30, 40, 50])).await?;

    stream.set_capacity(2).await?;
    let state = stream.state().await;
    assert_eq!(state.len, 2);
    assert_eq!(state.capacity, Capacity::new(2));

    let mut buf = [0u8; 32];
    assert_eq!(stream.read(&mut buf).await?, 8);
    assert_eq!(decode(&buf[..8]), [20, 10]);
    Ok(())
}

#[tokio::test]
async fn test_negative_capacity_rejected_without_change() -> anyhow::Result<()> {
    let device = device(4);
    let mut stream = device.open();
    stream.write(&encode(&[1, 2])).await?;

    assert_eq!(
        stream.set_capacity(-1).await,
        Err(StackError::InvalidCapacity { requested: -1 })
    );

    let state = stream.state().await;
    assert_eq!(state.len, 2);
    assert_eq!(state.capacity, Capacity::new(4));
    Ok(())
}

#[tokio::test]
async fn test_two_byte_write_is_zero_extended() -> anyhow::Result<()> {
    let device = device(4);
    let mut stream = device.open();

    assert_eq!(stream.write(&[0x05, 0x01]).await?, 2);
    assert_eq!(device.pop().await?, i32::from_ne_bytes([0x05, 0x01, 0x00, 0x00]));
    Ok(())
}

#[tokio::test]
async fn test_little_endian_42() -> anyhow::Result<()> {
    let device = device(4);
    let mut stream = device.open();

    stream.write(&42i32.to_ne_bytes()).await?;
    let mut buf = [0u8; 4];
    assert_eq!(stream.read(&mut buf).await?, 4);
    assert_eq!(i32::from_ne_bytes(buf), 42);
    if cfg!(target_endian = "little") {
        assert_eq!(buf, [0x2A, 0x00, 0x00, 0x00]);
    }
    Ok(())
}

#[tokio::test]
async fn test_full_and_empty_contract() -> anyhow::Result<()> {
    let device = device(2);
    let mut stream = device.open();

    // Empty stack reads as end-of-stream, not an error.
    let mut buf = [0u8; 8];
    assert_eq!(stream.read(&mut buf).await?, 0);

    // Third of five elements overflows: short write of two elements.
    assert_eq!(stream.write(&encode(&[1, 2, 3, 4, 5])).await?, 8);

    // Nothing fits: error, zero consumed.
    assert_eq!(
        stream.write(&encode(&[6])).await,
        Err(StreamError::Stack(StackError::StackFull))
    );

    assert_eq!(stream.read(&mut buf).await?, 8);
    assert_eq!(decode(&buf), [2, 1]);
    Ok(())
}
