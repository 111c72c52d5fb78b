//! Property-based tests for the CP2110 report codec.

use cp2110_hal::protocol::{
    DataBits, FlowControl, MAX_CHUNK_PAYLOAD, Parity, StopBits, UartConfig, WriteChunks,
    frame_write_chunks,
};
use proptest::prelude::*;

fn parity() -> impl Strategy<Value = Parity> {
    prop_oneof![
        Just(Parity::None),
        Just(Parity::Odd),
        Just(Parity::Even),
        Just(Parity::Mark),
        Just(Parity::Space),
    ]
}

fn flow_control() -> impl Strategy<Value = FlowControl> {
    prop_oneof![Just(FlowControl::Disabled), Just(FlowControl::Enabled)]
}

fn data_bits() -> impl Strategy<Value = DataBits> {
    prop_oneof![
        Just(DataBits::Five),
        Just(DataBits::Six),
        Just(DataBits::Seven),
        Just(DataBits::Eight),
    ]
}

fn stop_bits() -> impl Strategy<Value = StopBits> {
    prop_oneof![Just(StopBits::Short), Just(StopBits::Long)]
}

prop_compose! {
    fn uart_config()(
        baud in any::<u32>(),
        parity in parity(),
        flow_control in flow_control(),
        data_bits in data_bits(),
        stop_bits in stop_bits(),
    ) -> UartConfig {
        UartConfig { baud, parity, flow_control, data_bits, stop_bits }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every valid config decodes back to itself.
    #[test]
    fn prop_config_round_trip(config in uart_config()) {
        let report = config.to_feature_report();
        prop_assert_eq!(report[0], 0x50);
        prop_assert_eq!(UartConfig::from_feature_report(&report), Ok(config));
    }

    /// The baud rate occupies bytes 1..=4 in big-endian order.
    #[test]
    fn prop_baud_is_big_endian(config in uart_config()) {
        let report = config.to_feature_report();
        prop_assert_eq!(&report[1..5], &config.baud.to_be_bytes()[..]);
    }

    /// Undefined parity bytes are rejected rather than coerced.
    #[test]
    fn prop_undefined_parity_rejected(config in uart_config(), parity in 5u8..=255) {
        let mut report = config.to_feature_report();
        report[5] = parity;
        let err = UartConfig::from_feature_report(&report);
        prop_assert!(err.is_err(), "parity byte {parity} decoded as {err:?}");
    }

    /// Concatenated chunk payloads reproduce the input, and each header is the
    /// payload length plus one.
    #[test]
    fn prop_chunking_conserves_bytes(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let mut rebuilt = Vec::with_capacity(data.len());
        for report in frame_write_chunks(&data) {
            let bytes = report.as_bytes();
            prop_assert!(bytes[0] <= 63);
            prop_assert_eq!(bytes[0] as usize, bytes.len());
            prop_assert_eq!(report.payload(), &bytes[1..]);
            rebuilt.extend_from_slice(report.payload());
        }
        prop_assert_eq!(rebuilt, data);
    }

    /// The number of chunks is ceil(n / 62).
    #[test]
    fn prop_chunk_count(len in 0usize..2048) {
        let data = vec![0u8; len];
        let chunks = frame_write_chunks(&data);
        prop_assert_eq!(chunks.len(), len.div_ceil(MAX_CHUNK_PAYLOAD));
        prop_assert_eq!(chunks.count(), len.div_ceil(MAX_CHUNK_PAYLOAD));
    }

    /// Only the last chunk may be shorter than the payload limit.
    #[test]
    fn prop_chunks_are_full_except_last(
        data in proptest::collection::vec(any::<u8>(), 1..512),
        max in 1usize..=MAX_CHUNK_PAYLOAD,
    ) {
        let reports: Vec<_> = WriteChunks::with_max_payload(&data, max).collect();
        let (last, full) = reports.split_last().ok_or_else(|| {
            TestCaseError::fail("non-empty input produced no chunks")
        })?;
        for report in full {
            prop_assert_eq!(report.payload().len(), max);
        }
        prop_assert!(!last.payload().is_empty() && last.payload().len() <= max);
    }
}
