use modab_core::{Counted, FnModel, Target};
use modab_solvers::equation::modab::{self, Config, Sign, Status, Step};

use integration_tests::{Problem, hard, smooth};

/// Solves a problem through a counting model, returning the solution and call count.
fn run(problem: &Problem) -> (modab::Solution<f64, f64>, usize) {
    let model = Counted::new(FnModel::new(problem.f));
    let config = Config::for_target(modab::DEFAULT_PRECISION, problem.target)
        .expect("benchmark precision is valid");

    let target = Target::new(problem.target);

    let solution = modab::solve_unobserved(&model, &target, problem.bracket, &config)
        .expect("benchmark models are infallible");

    (solution, model.count())
}

#[test]
fn smooth_problems_converge_quickly() {
    let mut total = 0;

    for problem in smooth() {
        let (solution, calls) = run(&problem);

        assert_eq!(solution.status, Status::Converged, "{}", problem.name);
        assert_eq!(calls, solution.evals, "{}", problem.name);
        assert!(
            problem.residual(solution.x).abs() <= 1e-12,
            "{}: residual {} at x = {}",
            problem.name,
            problem.residual(solution.x),
            solution.x,
        );
        assert!(calls <= 20, "{}: {calls} evaluations", problem.name);

        total += calls;
    }

    // Bisection alone needs close to 50 evaluations per problem at this precision.
    let mean = total as f64 / smooth().len() as f64;
    assert!(mean < 15.0, "mean of {mean} evaluations");
}

#[test]
fn hard_problems_fall_back_to_bisection() {
    let max_evals = Config::default().max_iters() + 2;

    for problem in hard() {
        let (solution, calls) = run(&problem);
        let [left, right] = problem.bracket;

        assert_eq!(solution.status, Status::Converged, "{}", problem.name);
        assert!(solution.x.is_finite(), "{}", problem.name);
        assert!(
            (left..=right).contains(&solution.x),
            "{}: {} outside bracket",
            problem.name,
            solution.x
        );
        assert!(calls <= max_evals, "{}: {calls} evaluations", problem.name);
    }
}

#[test]
fn discontinuities_are_located() {
    let jumps = [("f36", 2.0 / 3.0), ("f38", 1.0 / 3.0), ("f40", 2.0 / 3.0), ("f79", 0.0)];

    for (name, jump) in jumps {
        let problem = hard()
            .into_iter()
            .find(|problem| problem.name == name)
            .expect("problem is in the hard set");
        let (solution, _) = run(&problem);

        assert!(
            (solution.x - jump).abs() < 1e-12,
            "{name}: {} is not at the jump {jump}",
            solution.x
        );
    }
}

#[test]
fn reversed_brackets_give_same_roots() {
    for problem in smooth() {
        let [left, right] = problem.bracket;
        let forward = modab_solvers::find_root_default(problem.f, left, right, problem.target);
        let reversed = modab_solvers::find_root_default(problem.f, right, left, problem.target);

        assert_eq!(forward.to_bits(), reversed.to_bits(), "{}", problem.name);
    }
}

#[test]
fn bracket_ends_keep_opposite_signs() {
    let mut saw_correction = false;
    let mut saw_safeguard = false;

    for problem in smooth().into_iter().chain(hard()) {
        let mut events = Vec::new();
        let observer = |event: &modab::Event<'_, _, _>| {
            events.push((event.step(), event.x(), event.bracket(), event.residual()));
            None
        };
        let config = Config::for_target(modab::DEFAULT_PRECISION, problem.target)
            .expect("benchmark precision is valid");

        modab::solve(
            &FnModel::new(problem.f),
            &Target::new(problem.target),
            problem.bracket,
            &config,
            observer,
        )
        .expect("benchmark models are infallible");

        let iterations: Vec<_> = events
            .into_iter()
            .filter(|(step, ..)| matches!(step, Step::Bisection | Step::Interpolation))
            .collect();

        for &(step, x, [left, right], _) in &iterations {
            assert_ne!(
                Sign::of(problem.residual(left)),
                Sign::of(problem.residual(right)),
                "{}: no sign change on [{left}, {right}]",
                problem.name,
            );
            if step == Step::Bisection {
                assert_eq!(x, 0.5 * (left + right), "{}", problem.name);
            }
        }

        // A step that follows two same-side interpolations was taken after the
        // Anderson–Björck scaling; interpolation only returns to bisection
        // through the stagnation safeguard.
        saw_correction |= iterations.windows(3).any(|w| {
            let (first, _, _, y1) = w[0];
            let (second, _, _, y2) = w[1];
            first == Step::Interpolation
                && second == Step::Interpolation
                && y1.map(Sign::of) == y2.map(Sign::of)
        });
        saw_safeguard |= iterations
            .windows(2)
            .any(|w| w[0].0 == Step::Interpolation && w[1].0 == Step::Bisection);
    }

    assert!(saw_correction, "no run exercised the Anderson–Björck scaling");
    assert!(saw_safeguard, "no run exercised the stagnation safeguard");
}
