//! Benchmarks for PHP extraction performance

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symdoc_php::{Language, PhpExtractor, SourceUnit, SymbolExtractor};

fn bench_extract_functions(c: &mut Criterion) {
    let source = r#"<?php
function hello(string $name): string {
    return "Hello, " . $name . "!";
}

function add(int $a, int $b): int {
    return $a + $b;
}
"#;
    let unit = SourceUnit::new(Language::Php, source, "bench.php");

    c.bench_function("extract_simple_functions", |b| {
        b.iter(|| {
            let extractor = PhpExtractor::new();
            extractor.extract_unit(black_box(&unit)).unwrap()
        })
    });
}

fn bench_extract_class(c: &mut Criterion) {
    let source = r#"<?php
namespace App;

/**
 * A person with a name and an age.
 */
class Person {
    public function __construct(
        private string $name,
        private int $age
    ) { }

    /**
     * The person's name.
     */
    public function getName(): string {
        return $this->name;
    }

    public function getAge(): int {
        return $this->age;
    }

    public static function create(string $name, int $age): Person {
        return new Person($name, $age);
    }

    private function validate(?int $age = null): bool {
        return ($age ?? $this->age) >= 0;
    }
}
"#;
    let unit = SourceUnit::new(Language::Php, source, "bench.php");

    c.bench_function("extract_class_with_methods", |b| {
        b.iter(|| {
            let extractor = PhpExtractor::new();
            extractor.extract_unit(black_box(&unit)).unwrap()
        })
    });
}

criterion_group!(benches, bench_extract_functions, bench_extract_class);
criterion_main!(benches);
