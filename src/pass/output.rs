//! Batch generation and output writing.

use std::fs::OpenOptions;
use std::io::{self, Write};

use rand::{CryptoRng, Rng};
use zeroize::{Zeroize, Zeroizing};

use crate::settings::Settings;

use super::error::GenerateError;
use super::generate::generate;

/// Generate the configured number of passwords and deliver them to the
/// selected destination: the clipboard payload is returned for the caller
/// to hand off, otherwise lines go to the output file or stdout.
pub fn write_batch<R: Rng + CryptoRng>(
    settings: &Settings,
    rng: &mut R,
) -> Result<Option<Zeroizing<String>>, GenerateError> {
    let count = settings.count.max(1);

    if settings.to_clipboard {
        let mut payload = Zeroizing::new(String::new());
        for _ in 0..count {
            let mut pass = generate(&settings.generation, rng)?;
            payload.push_str(&pass);
            payload.push('\n');
            pass.zeroize();
        }
        return Ok(Some(payload));
    }

    if settings.output_file.is_empty() {
        let stdout = io::stdout();
        let mut out = WipingWriter::new(stdout.lock());
        emit(settings, count, rng, &mut out)?;
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.output_file)?;
        let mut out = WipingWriter::new(file);
        emit(settings, count, rng, &mut out)?;
    }
    Ok(None)
}

fn emit<R: Rng + CryptoRng, W: Write>(
    settings: &Settings,
    count: usize,
    rng: &mut R,
    out: &mut WipingWriter<W>,
) -> Result<(), GenerateError> {
    for _ in 0..count {
        let mut pass = generate(&settings.generation, rng)?;
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
        pass.zeroize();
    }
    out.flush()?;
    Ok(())
}

/// Buffered writer that wipes its buffer after every drain and again on
/// drop, so password bytes do not linger in freed heap memory.
pub struct WipingWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> WipingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.inner.write_all(&self.buf)?;
            self.buf.zeroize();
        }
        Ok(())
    }
}

impl<W: Write> Write for WipingWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.drain()?;
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for WipingWriter<W> {
    fn drop(&mut self) {
        let _ = self.drain();
        let _ = self.inner.flush();
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiping_writer_passes_data_through() {
        let mut sink = Vec::new();
        {
            let mut out = WipingWriter::new(&mut sink);
            out.write_all(b"alpha\n").unwrap();
            out.write_all(b"beta\n").unwrap();
            out.flush().unwrap();
        }
        assert_eq!(sink, b"alpha\nbeta\n");
    }

    #[test]
    fn wiping_writer_clears_its_buffer_on_drain() {
        let mut sink = Vec::new();
        let mut out = WipingWriter::new(&mut sink);
        out.write_all(b"secret").unwrap();
        out.flush().unwrap();
        assert!(out.buf.iter().all(|&b| b == 0));
        assert!(out.buf.is_empty());
    }

    #[test]
    fn clipboard_batch_collects_every_password() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let settings = Settings {
            count: 3,
            to_clipboard: true,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let payload = write_batch(&settings, &mut rng).unwrap().unwrap();
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.chars().count(), settings.generation.length);
        }
    }
}
