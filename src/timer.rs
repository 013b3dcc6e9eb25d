use anyhow::Result;
use std::time::{Duration, Instant};

/// Runs `f(input)` once and measures it with the monotonic clock.
///
/// Errors from `f` are returned as-is; nothing is retried.
pub fn timed_call<T, F>(f: F, input: &[u8]) -> Result<(T, Duration)>
where
    F: FnOnce(&[u8]) -> Result<T>,
{
    let start = Instant::now();
    let output = f(input)?;
    Ok((output, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::thread;

    #[test]
    fn test_timed_call_returns_output_and_elapsed() -> Result<()> {
        let (len, elapsed) = timed_call(
            |data| {
                thread::sleep(Duration::from_millis(5));
                Ok(data.len())
            },
            b"abc",
        )?;
        assert_eq!(len, 3);
        assert!(elapsed >= Duration::from_millis(5));
        Ok(())
    }

    #[test]
    fn test_timed_call_propagates_errors() {
        let result: Result<((), Duration)> = timed_call(|_| bail!("digest failed"), b"abc");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "digest failed");
    }
}
