use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use linked_bst::OrderedTree;

/// How the tree under test was put together.
#[derive(Clone, Copy)]
enum Shape {
    /// Values added in ascending order, so every node only has a right child.
    Skewed,
    /// The skewed tree after `rebalance`.
    Rebalanced,
}

impl Shape {
    fn name(self) -> &'static str {
        match self {
            Self::Skewed => "skewed",
            Self::Rebalanced => "rebalanced",
        }
    }

    fn build(self, num_nodes: usize) -> OrderedTree<i32> {
        let mut tree: OrderedTree<i32> = (0..num_nodes as i32).collect();
        if let Self::Rebalanced = self {
            tree.rebalance();
        }

        tree
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group. Building the tree isn't timed.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Skewed trees take quadratic time to build so stay below 2^12 nodes.
    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        for shape in [Shape::Skewed, Shape::Rebalanced] {
            let id = BenchmarkId::new(shape.name(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_batched_ref(
                    || shape.build(num_nodes),
                    |tree| f(tree, black_box(largest_element_in_tree)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        let _value = black_box(tree.remove(&i));
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "successor", |tree, i| {
        let _value = black_box(tree.successor(&(i - 1)));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        let _value = black_box(tree.remove(&(i + 1)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
