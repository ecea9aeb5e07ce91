use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use robot_lang::{
    Condition, Statement, StatementVisitor, count_primitive_calls, simplify, simplify_with_stats,
};

const LABELS: [&str; 8] = [
    "move",
    "turnleft",
    "turnright",
    "infect",
    "skip",
    "find-obstacle",
    "go-forward-3-times",
    "Move",
];

fn init_logger() {
    let _ = simple_logger::init_with_level(log::Level::Trace);
}

fn random_statement(rng: &mut StdRng, depth: u32) -> Statement {
    let condition = *Condition::ALL.choose(rng).unwrap();
    if depth == 0 {
        return Statement::call(*LABELS.choose(rng).unwrap());
    }
    match rng.gen_range(0..5) {
        0 => {
            let len = rng.gen_range(0..4);
            Statement::block((0..len).map(|_| random_statement(rng, depth - 1)).collect())
        }
        1 => Statement::if_then(condition, random_statement(rng, depth - 1)),
        2 => Statement::if_else(
            condition,
            random_statement(rng, depth - 1),
            random_statement(rng, depth - 1),
        ),
        3 => Statement::while_loop(condition, random_statement(rng, depth - 1)),
        _ => Statement::call(*LABELS.choose(rng).unwrap()),
    }
}

fn random_programs() -> Vec<Statement> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..200).map(|_| random_statement(&mut rng, 6)).collect()
}

/// Fails on any IF_ELSE left with a negated condition.
struct NoNegatedIfElse;

impl StatementVisitor for NoNegatedIfElse {
    fn visit_statement(&mut self, statement: &Statement) {
        if let Statement::IfElse { condition, .. } = statement {
            assert!(!condition.is_negated(), "{condition} survived simplification");
        }
        self.super_visit_statement(statement);
    }
}

/// Collects every IF and WHILE condition in visiting order.
struct GuardConditions(Vec<Condition>);

impl StatementVisitor for GuardConditions {
    fn visit_statement(&mut self, statement: &Statement) {
        if let Statement::If { condition, .. } | Statement::While { condition, .. } = statement {
            self.0.push(*condition);
        }
        self.super_visit_statement(statement);
    }
}

fn guard_conditions(statement: &Statement) -> Vec<Condition> {
    let mut guards = GuardConditions(Vec::new());
    guards.visit_statement(statement);
    guards.0.sort_by_key(|condition| condition.name());
    guards.0
}

#[test]
fn simplify_is_idempotent() {
    for program in random_programs() {
        let once = simplify(program);
        let twice = simplify(once.clone());
        assert_eq!(twice, once);
    }
}

#[test]
fn simplify_removes_every_negated_if_else() {
    for program in random_programs() {
        NoNegatedIfElse.visit_statement(&simplify(program));
    }
}

#[test]
fn simplify_keeps_if_and_while_guards() {
    for program in random_programs() {
        let before = guard_conditions(&program);
        assert_eq!(guard_conditions(&simplify(program)), before);
    }
}

#[test]
fn count_is_invariant_under_simplify() {
    for program in random_programs() {
        let before = count_primitive_calls(&program);
        assert_eq!(count_primitive_calls(&simplify(program)), before);
    }
}

#[test]
fn scenario_negated_wall_check() {
    init_logger();

    let original = Statement::if_else(
        Condition::NextIsNotWall,
        Statement::block(vec![Statement::call("move")]),
        Statement::block(vec![Statement::call("turnleft"), Statement::call("infect")]),
    );
    let expected = Statement::if_else(
        Condition::NextIsWall,
        Statement::block(vec![Statement::call("turnleft"), Statement::call("infect")]),
        Statement::block(vec![Statement::call("move")]),
    );

    assert_eq!(count_primitive_calls(&original), 3);

    let mut simplified = original;
    assert_eq!(simplify_with_stats(&mut simplified), 1);
    assert_eq!(simplified, expected);
    assert_eq!(count_primitive_calls(&simplified), 3);
}

#[test]
fn scenario_skip_is_untouched() {
    let skip = Statement::call("skip");
    assert_eq!(simplify(skip.clone()), skip);
    assert_eq!(count_primitive_calls(&skip), 1);
}

#[test]
fn scenario_user_instruction_body() {
    init_logger();

    // body of a user instruction that hunts for enemies
    let program = Statement::block(vec![
        Statement::while_loop(
            Condition::True,
            Statement::if_else(
                Condition::NextIsNotEnemy,
                Statement::if_else(
                    Condition::NextIsNotEmpty,
                    Statement::call("turnright"),
                    Statement::call("move"),
                ),
                Statement::call("infect"),
            ),
        ),
        Statement::call("find-obstacle"),
    ]);
    let expected = Statement::block(vec![
        Statement::while_loop(
            Condition::True,
            Statement::if_else(
                Condition::NextIsEnemy,
                Statement::call("infect"),
                Statement::if_else(
                    Condition::NextIsEmpty,
                    Statement::call("move"),
                    Statement::call("turnright"),
                ),
            ),
        ),
        Statement::call("find-obstacle"),
    ]);

    let simplified = simplify(program.clone());
    assert_eq!(simplified, expected);
    assert_eq!(count_primitive_calls(&program), 3);
    assert_eq!(count_primitive_calls(&simplified), 3);
}
