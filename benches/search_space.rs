//! Benchmarks for search-space graph construction.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use search_space::{
    graph::{GroupIndex, build_layer_graph, project_ruleset, reachable_from},
    schema::{Gene, GroupRule, LayerRule, Ruleset},
};

/// Layered ruleset: `groups` groups of `per_group` layers, each layer allowed
/// before every layer of its own group and each group before the next.
fn synthetic_ruleset(groups: usize, per_group: usize) -> Ruleset {
    let layer = |g: usize, l: usize| format!("L{}_{}", g, l);
    let group = |g: usize| format!("Group {}", g);

    let mut gene_pool = Vec::with_capacity(groups * per_group);
    let mut rule_set = vec![LayerRule::new("Start".to_string(), vec![layer(0, 0)])];
    let mut rule_set_groups = Vec::with_capacity(groups);

    for g in 0..groups {
        for l in 0..per_group {
            gene_pool.push(Gene::new(layer(g, l), Some(group(g).as_str())));
            rule_set.push(LayerRule::new(
                layer(g, l),
                (0..per_group).map(|t| layer(g, t)).collect::<Vec<_>>(),
            ));
        }
        if g + 1 < groups {
            rule_set_groups.push(GroupRule::new(group(g), vec![group(g + 1)]));
        }
    }

    Ruleset {
        gene_pool: Some(gene_pool),
        rule_set,
        rule_set_groups,
    }
}

fn bench_layer_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_graph");

    for groups in [4, 16, 64] {
        let ruleset = synthetic_ruleset(groups, 8);
        let index = GroupIndex::build(&ruleset).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_groups", groups)),
            &groups,
            |b, _| {
                b.iter(|| build_layer_graph(black_box(&ruleset), &index, true).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");

    for groups in [4, 16, 64] {
        let ruleset = synthetic_ruleset(groups, 8);
        let index = GroupIndex::build(&ruleset).unwrap();
        let graph = build_layer_graph(&ruleset, &index, true).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_groups", groups)),
            &groups,
            |b, _| {
                b.iter(|| reachable_from(black_box(&graph), "Start").unwrap());
            },
        );
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for groups in [4, 16, 64] {
        let ruleset = synthetic_ruleset(groups, 8);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_groups", groups)),
            &groups,
            |b, _| {
                b.iter(|| project_ruleset(black_box(&ruleset), "Start").unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layer_graph, bench_reachability, bench_projection);
criterion_main!(benches);
