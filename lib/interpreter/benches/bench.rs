use criterion::{criterion_group, criterion_main, Criterion};
use interpreter::Interpreter;
use parser::Parser;
use report::Diagnostics;
use scanner::Scanner;

fn run(source: &str) {
    let mut diagnostics = Diagnostics::default();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    let statements = Parser::new(&tokens, &mut diagnostics).parse();
    assert!(diagnostics.is_empty(), "{}", diagnostics);
    let mut output = Vec::new();
    Interpreter::new(&mut output).run(&statements, &mut diagnostics).unwrap();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("arithmetic", |b| {
        b.iter(|| {
            let source = r#"
                print 1 + 2 * 3 - 4 / 5;
                print (1 + 2) * (3 + 4) * (5 + 6) * (7 + 8);
                print 1 < 2 == 3 >= 4 != 5 <= 6;
                print -1 - -2 - -3 - -4 - -5;
            "#;
            run(source)
        })
    });

    c.bench_function("ternaries and strings", |b| {
        b.iter(|| {
            let source = r#"
                print 1 < 2 ? "a" + "b" + "c" : "d" + "e" + "f";
                print "n = " + (2 * 2, 3 * 3, 4 * 4);
                print nil ? 1 : "" ? "empty strings are truthy" : 2;
            "#;
            run(source)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
