//! Property tests for the cycle controller.
//!
//! Exercise the controller over arbitrary configurations and fault
//! injection points; the observable contract must hold for all of them.

use proptest::prelude::*;

use aquawash::app::service::{CycleService, RunResult, Status, MAXIMAL_FILTER_CAPACITY};
use aquawash::config::{FillLevel, ProgramConfiguration, WashProgram};

use super::mock_hw::{HwCall, MockHardware, RecordingSink};

fn arb_program() -> impl Strategy<Value = WashProgram> {
    prop_oneof![
        Just(WashProgram::Intensive),
        Just(WashProgram::Eco),
        Just(WashProgram::Quick),
        Just(WashProgram::Rinse),
    ]
}

fn arb_fill() -> impl Strategy<Value = FillLevel> {
    prop_oneof![Just(FillLevel::Half), Just(FillLevel::Full)]
}

fn arb_config() -> impl Strategy<Value = ProgramConfiguration> {
    (arb_program(), arb_fill(), any::<bool>())
        .prop_map(|(program, fill, tablets)| ProgramConfiguration::new(program, fill, tablets))
}

/// Where to inject the single actuation fault (invocation is 1-based).
#[derive(Debug, Clone, Copy)]
enum FaultSite {
    Pour(u32),
    Drain(u32),
    Engine(u32),
}

fn arb_fault() -> impl Strategy<Value = FaultSite> {
    prop_oneof![
        (1u32..=2).prop_map(FaultSite::Pour),
        (1u32..=2).prop_map(FaultSite::Drain),
        (1u32..=2).prop_map(FaultSite::Engine),
    ]
}

fn run(config: &ProgramConfiguration, hw: &mut MockHardware) -> RunResult {
    let mut sink = RecordingSink::new();
    CycleService::new().start(config, hw, &mut sink)
}

proptest! {
    #[test]
    fn open_door_always_refuses_without_touching_anything(
        config in arb_config(),
        fouling in 0.0f32..100.0,
    ) {
        let mut hw = MockHardware::new();
        hw.door_closed = false;
        hw.fouling = fouling;

        let result = run(&config, &mut hw);

        prop_assert_eq!(result, RunResult::aborted(Status::DoorOpen));
        prop_assert_eq!(hw.calls.as_slice(), &[HwCall::Closed]);
    }

    #[test]
    fn filter_is_queried_exactly_for_tablet_loads(
        config in arb_config(),
        fouling in 0.0f32..100.0,
    ) {
        let mut hw = MockHardware::new();
        hw.fouling = fouling;

        run(&config, &mut hw);

        prop_assert_eq!(
            hw.count(HwCall::Capacity),
            usize::from(config.tablets_used)
        );
    }

    #[test]
    fn fouled_filter_always_refuses_tablet_loads(
        config in arb_config(),
        excess in 0.0f32..50.0,
    ) {
        let mut hw = MockHardware::new();
        hw.fouling = MAXIMAL_FILTER_CAPACITY + excess;

        let result = run(&config, &mut hw);

        if config.tablets_used {
            prop_assert_eq!(result, RunResult::aborted(Status::ErrorFilter));
            prop_assert_eq!(hw.calls.as_slice(), &[HwCall::Closed, HwCall::Capacity]);
        } else {
            prop_assert_eq!(result.status, Status::Success);
        }
    }

    #[test]
    fn clean_run_follows_the_fixed_sequence(
        config in arb_config(),
        fouling in 0.0f32..MAXIMAL_FILTER_CAPACITY,
    ) {
        let mut hw = MockHardware::new();
        hw.fouling = fouling;

        let result = run(&config, &mut hw);

        prop_assert_eq!(result, RunResult::success(config.program.time_in_minutes()));

        let mut expected = vec![HwCall::Closed];
        if config.tablets_used {
            expected.push(HwCall::Capacity);
        }
        expected.extend([
            HwCall::Lock,
            HwCall::Pour(config.fill_level),
            HwCall::RunProgram(config.program),
            HwCall::Drain,
            HwCall::Pour(config.fill_level),
            HwCall::RunProgram(WashProgram::Rinse),
            HwCall::Drain,
        ]);
        prop_assert_eq!(hw.calls, expected);
    }

    #[test]
    fn a_single_fault_aborts_with_the_matching_status(
        config in arb_config(),
        fault in arb_fault(),
    ) {
        let mut hw = MockHardware::new();
        let expected_status = match fault {
            FaultSite::Pour(n) => { hw.fail_pour_on(n); Status::ErrorPump }
            FaultSite::Drain(n) => { hw.fail_drain_on(n); Status::ErrorPump }
            FaultSite::Engine(n) => { hw.fail_engine_on(n); Status::ErrorProgram }
        };

        let result = run(&config, &mut hw);

        prop_assert_eq!(result, RunResult::aborted(expected_status));

        // The failing call is the last thing the controller did.
        let expected_last = match fault {
            FaultSite::Pour(_) => HwCall::Pour(config.fill_level),
            FaultSite::Drain(_) => HwCall::Drain,
            FaultSite::Engine(1) => HwCall::RunProgram(config.program),
            FaultSite::Engine(_) => HwCall::RunProgram(WashProgram::Rinse),
        };
        prop_assert_eq!(hw.calls.last().copied(), Some(expected_last));
    }

    #[test]
    fn lock_follows_closed_and_happens_at_most_once(
        config in arb_config(),
        fouling in 0.0f32..100.0,
        door_closed in any::<bool>(),
    ) {
        let mut hw = MockHardware::new();
        hw.door_closed = door_closed;
        hw.fouling = fouling;

        run(&config, &mut hw);

        let locks = hw.count(HwCall::Lock);
        prop_assert!(locks <= 1);

        let preconditions_pass =
            door_closed && !(config.tablets_used && fouling >= MAXIMAL_FILTER_CAPACITY);
        prop_assert_eq!(locks, usize::from(preconditions_pass));

        if let Some(locked_at) = hw.index_of(HwCall::Lock) {
            let closed_at = hw.index_of(HwCall::Closed).unwrap();
            prop_assert!(closed_at < locked_at);
        }
    }

    #[test]
    fn minutes_are_reported_only_on_success(
        config in arb_config(),
        fouling in 0.0f32..100.0,
        door_closed in any::<bool>(),
    ) {
        let mut hw = MockHardware::new();
        hw.door_closed = door_closed;
        hw.fouling = fouling;

        let result = run(&config, &mut hw);

        if result.status == Status::Success {
            prop_assert_eq!(result.run_minutes, config.program.time_in_minutes());
        } else {
            prop_assert_eq!(result.run_minutes, 0);
        }
    }
}
