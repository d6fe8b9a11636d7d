//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{request_workspace, sample_request, write_request, write_utf8};
use super::*;
use crate::rank::run_rank_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use runmate_core::{MatchCandidate, MatchError};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RankWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        let (tmp, request_path) = request_workspace();
        Self {
            _tmp: tmp,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["runmate".to_owned(), "rank".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn printed(&self) -> Vec<MatchCandidate> {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON ranking")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("a rank request with four candidates exists on disk")]
fn sample_request_exists(#[from(world)] world: &RankWorld) {
    write_request(&world.request_path, &sample_request());
}

#[given("a rank request whose reference runner is incomplete exists on disk")]
fn incomplete_reference_exists(#[from(world)] world: &RankWorld) {
    let mut request = sample_request();
    request.reference.is_complete = false;
    write_request(&world.request_path, &request);
}

#[given("the rank request contains invalid JSON")]
fn rank_request_contains_invalid_json(#[from(world)] world: &RankWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the rank request path")]
fn omit_rank_request_path(#[from(world)] world: &RankWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I pass a limit of one")]
fn pass_limit_of_one(#[from(world)] world: &RankWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_RANK_LIMIT}"), "1".to_owned()]);
}

#[given("I pass a goal weight of one half")]
fn pass_goal_weight(#[from(world)] world: &RankWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_RANK_GOAL_WEIGHT}"), "0.5".to_owned()]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints three ranked candidates")]
fn prints_three_candidates(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let ids: Vec<String> = world
        .printed()
        .iter()
        .map(|candidate| candidate.profile_id.to_string())
        .collect();
    assert_eq!(ids, ["p-marcus", "p-emma", "p-jordan"]);
}

#[then("the connected candidate is printed last")]
fn connected_candidate_last(#[from(world)] world: &RankWorld) {
    let printed = world.printed();
    let flags: Vec<bool> = printed
        .iter()
        .map(|candidate| candidate.already_connected)
        .collect();
    assert_eq!(flags, [false, false, true]);
}

#[then("the command succeeds and prints one ranked candidate")]
fn prints_one_candidate(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let printed = world.printed();
    assert_eq!(printed.len(), 1);
    assert!(
        printed
            .first()
            .is_some_and(|candidate| candidate.profile_id.as_str() == "p-marcus")
    );
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::ParseRankRequest { .. } => {}
        other => panic!("expected ParseRankRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RANK_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the reference runner is incomplete")]
fn command_fails_incomplete_reference(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::Match(MatchError::ProfileIncomplete { profile }) => {
            assert_eq!(profile.as_str(), "p-sarah");
        }
        other => panic!("expected ProfileIncomplete, found {other:?}"),
    }
}

#[then("the command fails because the weights are invalid")]
fn command_fails_invalid_weights(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::Match(MatchError::InvalidWeights) => {}
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_happy_path, "ranking a request from JSON");
register_rank_scenario!(rank_with_limit, "limiting the number of candidates");
register_rank_scenario!(rank_invalid_json, "rejecting invalid JSON input");
register_rank_scenario!(rank_missing_request, "rejecting missing request paths");
register_rank_scenario!(
    rank_incomplete_reference,
    "rejecting an incomplete reference runner"
);
register_rank_scenario!(rank_invalid_weights, "rejecting weights that do not sum to one");
