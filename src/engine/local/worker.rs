use super::E;
use crate::{engine::Reporter, hasher::Hasher, reader::Reader, Breaker};

/// Reports progress only when the whole percentage changes.
struct Ticker<'a> {
    reporter: &'a Reporter,
    total: u64,
    done: u64,
    percent: u64,
}

impl<'a> Ticker<'a> {
    fn new(reporter: &'a Reporter, total: u64) -> Self {
        Self {
            reporter,
            total,
            done: 0,
            percent: 0,
        }
    }

    fn advance(&mut self, bytes: usize) {
        self.done += bytes as u64;
        if self.total == 0 {
            return;
        }
        let percent = (self.done.min(self.total) * 100) / self.total;
        if percent > self.percent {
            self.percent = percent;
            self.reporter.progress(self.done.min(self.total) as f64 / self.total as f64);
        }
    }
}

/// Feeds the whole file into every hasher and finalizes them. The breaker is checked before each
/// chunk; an abort stops reading with `E::Aborted`.
pub(crate) fn hash_file<R: Reader>(
    mut reader: R,
    size: u64,
    hashers: &mut [Box<dyn Hasher>],
    breaker: &Breaker,
    reporter: &Reporter,
) -> Result<(), E> {
    let mut ticker = Ticker::new(reporter, size);
    loop {
        if breaker.is_aborted() {
            return Err(E::Aborted);
        }
        let chunk = match reader.next_chunk() {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(err) => return Err(err.into()),
        };
        for hasher in hashers.iter_mut() {
            hasher.absorb(chunk)?;
        }
        ticker.advance(chunk.len());
    }
    if breaker.is_aborted() {
        return Err(E::Aborted);
    }
    for hasher in hashers.iter_mut() {
        hasher.finish()?;
    }
    Ok(())
}
