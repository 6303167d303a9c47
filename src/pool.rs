use std::{sync::Arc, thread};

use crossbeam::channel;

use crate::{
    error::FanError,
    fan::{FanSpec, RangeFan},
    sector::Point2D,
};

/// Builds fans for many centers on a pool of worker threads.
pub struct FanBuilder {
    spec: Arc<FanSpec>,
    n_threads: usize,
}

impl FanBuilder {
    pub fn new(spec: FanSpec, n_threads: usize) -> FanBuilder {
        FanBuilder {
            spec: Arc::new(spec),
            n_threads: n_threads.max(1),
        }
    }

    /// Builds one fan per center, returned in the order of `centers`. Fails with the error of
    /// the first failing center.
    pub fn build(&self, centers: &[Point2D]) -> Result<Vec<RangeFan>, FanError> {
        let n = centers.len();
        if self.n_threads == 1 || n < 2 {
            log::debug!("Building {} fans inline", n);
            return centers.iter().map(|&c| self.spec.fan_at(c)).collect();
        }

        // Never spawn more workers than there is work
        let n_threads = self.n_threads.min(n);
        log::debug!("Building {} fans on {} threads", n, n_threads);

        // Create channel of (index, center) pairs to process
        let (idx_tx, idx_rx) = channel::bounded(n);
        for (i, &c) in centers.iter().enumerate() {
            idx_tx.send((i, c)).expect("work queue receiver is held locally");
        }
        // Close so workers stop once the queue drains
        drop(idx_tx);

        // Create channel for workers to send fans back
        let (res_tx, res_rx) = channel::bounded(n);
        let mut thrs = Vec::with_capacity(n_threads);
        for _ in 0..n_threads {
            let spec = self.spec.clone();
            let idx_rx = idx_rx.clone();
            let res_tx = res_tx.clone();
            thrs.push(thread::spawn(move || {
                while let Ok((i, center)) = idx_rx.recv() {
                    log::trace!("Building fan {} at {}", i, center);
                    // Result channel holds every result, so this never blocks
                    if res_tx.send((i, spec.fan_at(center))).is_err() {
                        log::warn!("Result channel closed; dropping fan {}", i);
                        break;
                    }
                }
            }));
        }
        drop(res_tx);

        // Collect fans from workers, restoring input order
        let mut slots: Vec<Option<Result<RangeFan, FanError>>> = vec![None; n];
        for (i, res) in res_rx.iter() {
            slots[i] = Some(res);
        }
        for thr in thrs {
            if let Err(e) = thr.join() {
                std::panic::resume_unwind(e);
            }
        }

        // Every worker joined cleanly, so every slot is filled
        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FanParams;
    use rand::Rng;

    fn spec(traversal: f64) -> FanSpec {
        FanSpec::new(
            FanParams {
                range: 100.,
                bearing: 30.,
                traversal,
            },
            1.,
            72,
        )
        .unwrap()
    }

    fn random_centers(n: usize) -> Vec<Point2D> {
        let mut rng = rand::thread_rng();
        (0..n)
            .map(|_| Point2D::new(rng.gen_range(-1e5..1e5), rng.gen_range(-1e5..1e5)))
            .collect()
    }

    #[test]
    fn parallel_matches_inline_order() {
        let centers = random_centers(500);
        let inline = FanBuilder::new(spec(45.), 1).build(&centers).unwrap();
        let parallel = FanBuilder::new(spec(45.), 8).build(&centers).unwrap();

        assert_eq!(inline.len(), centers.len());
        assert_eq!(inline, parallel);
        for (fan, center) in parallel.iter().zip(&centers) {
            assert_eq!(fan.ring()[0], *center);
        }
    }

    #[test]
    fn discs_in_parallel() {
        let centers = random_centers(20);
        let fans = FanBuilder::new(spec(400.), 4).build(&centers).unwrap();
        assert!(fans.iter().all(|f| matches!(f, RangeFan::Disc(_))));
    }

    #[test]
    fn first_failure_is_reported() {
        let mut centers = random_centers(50);
        centers[7] = Point2D::new(f64::INFINITY, 0.);
        centers[30] = Point2D::new(0., f64::NAN);
        let err = FanBuilder::new(spec(10.), 4).build(&centers).unwrap_err();
        assert_eq!(
            err,
            FanError::InvalidCenter {
                x: f64::INFINITY,
                y: 0.
            }
        );
    }

    #[test]
    fn no_centers_no_fans() {
        assert!(FanBuilder::new(spec(10.), 4).build(&[]).unwrap().is_empty());
    }
}
