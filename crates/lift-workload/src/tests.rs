//! Unit tests for lift-workload.

use std::io::Cursor;

use lift_core::{PassengerRequest, Tick};

use crate::{RandomWorkload, WorkloadError, WorkloadRng, WorkloadScript, load_script_reader};

// ── WorkloadScript ────────────────────────────────────────────────────────────

#[cfg(test)]
mod script {
    use super::*;

    #[test]
    fn push_groups_by_tick_in_order() {
        let mut script = WorkloadScript::new();
        script.push(Tick(2), PassengerRequest::new(1, 5));
        script.push(Tick(0), PassengerRequest::new(3, 1));
        script.push(Tick(2), PassengerRequest::new(4, 9));

        assert_eq!(script.len(), 3);
        assert_eq!(script.requests_at(Tick(0)), &[PassengerRequest::new(3, 1)]);
        assert_eq!(
            script.requests_at(Tick(2)),
            &[PassengerRequest::new(1, 5), PassengerRequest::new(4, 9)]
        );
        assert!(script.requests_at(Tick(1)).is_empty());
        assert_eq!(script.last_tick(), Some(Tick(2)));

        let ticks: Vec<Tick> = script.batches().map(|(t, _)| t).collect();
        assert_eq!(ticks, vec![Tick(0), Tick(2)]);
    }

    #[test]
    fn empty_script() {
        let script = WorkloadScript::new();
        assert!(script.is_empty());
        assert_eq!(script.last_tick(), None);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_into_ticks() {
        let csv = "tick,start_floor,end_floor\n0,1,5\n3,8,1\n0,1,9\n";
        let script = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(
            script.requests_at(Tick(0)),
            &[PassengerRequest::new(1, 5), PassengerRequest::new(1, 9)]
        );
        assert_eq!(script.requests_at(Tick(3)), &[PassengerRequest::new(8, 1)]);
    }

    #[test]
    fn tolerates_whitespace() {
        let csv = "tick, start_floor, end_floor\n 1 , 2 , 7 \n";
        let script = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(script.requests_at(Tick(1)), &[PassengerRequest::new(2, 7)]);
    }

    #[test]
    fn header_only_is_empty() {
        let script = load_script_reader(Cursor::new("tick,start_floor,end_floor\n")).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn floors_are_not_validated_here() {
        // Same-floor and out-of-range requests are the dispatcher's call.
        let csv = "tick,start_floor,end_floor\n0,4,4\n0,0,99\n";
        let script = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(script.len(), 2);
    }

    #[test]
    fn bad_row_reports_line() {
        let csv = "tick,start_floor,end_floor\n0,1,5\n1,up,5\n";
        match load_script_reader(Cursor::new(csv)) {
            Err(WorkloadError::Parse(msg)) => assert!(msg.starts_with("row 3"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = crate::load_script_csv(std::path::Path::new("/nonexistent/workload.csv"));
        assert!(matches!(result, Err(WorkloadError::Io(_))));
    }
}

// ── Random generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = RandomWorkload::new(42, 11).unwrap().take(50).collect();
        let b: Vec<_> = RandomWorkload::new(42, 11).unwrap().take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn requests_are_always_valid() {
        let workload = RandomWorkload::new(7, 11)
            .unwrap()
            .arrival_probability(1.0)
            .max_per_tick(5);
        for batch in workload.take(500) {
            assert!((1..=5).contains(&batch.len()));
            for request in batch {
                assert!(request.validate(11).is_ok(), "{request:?}");
            }
        }
    }

    #[test]
    fn two_floor_building_alternates() {
        let workload = RandomWorkload::new(1, 2).unwrap().arrival_probability(1.0);
        for request in workload.take(100).flatten() {
            assert_ne!(request.start_floor, request.end_floor);
        }
    }

    #[test]
    fn zero_probability_is_silent() {
        let mut workload = RandomWorkload::new(3, 11).unwrap().arrival_probability(0.0);
        assert!((0..100).all(|_| workload.next_batch().is_empty()));
    }

    #[test]
    fn zero_batch_size_is_silent() {
        let mut workload = RandomWorkload::new(3, 11)
            .unwrap()
            .arrival_probability(1.0)
            .max_per_tick(0);
        assert!(workload.next_batch().is_empty());
    }

    #[test]
    fn single_floor_building_rejected() {
        assert!(matches!(RandomWorkload::new(0, 1), Err(WorkloadError::Config(_))));
    }

    #[test]
    fn child_streams_differ() {
        let mut root = WorkloadRng::new(9);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1_000_000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1_000_000)).collect();
        assert_ne!(xs, ys);
    }
}
