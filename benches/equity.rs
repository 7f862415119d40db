use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdem_equity::*;

fn hand(s: &str) -> Hole {
    parse_hand_string(s).unwrap()
}

fn evaluate_seven_cards(c: &mut Criterion) {
    let cards = parse_cards("AsKd7h7c2s9dTd").unwrap();
    c.bench_function("evaluate 7 cards", |b| {
        b.iter(|| evaluate_hand(black_box(&cards)).unwrap())
    });
}

fn preflop_equity(c: &mut Criterion) {
    let calc = EquityCalculator::seeded(1);
    let (aces, kings) = (hand("AsAh"), hand("KsKh"));
    c.bench_function("equity preflop 1k trials", |b| {
        b.iter(|| calc.calculate_equity(&aces, &kings, &[], black_box(1_000)).unwrap())
    });
}

fn flop_equity(c: &mut Criterion) {
    let calc = EquityCalculator::seeded(1);
    let board = parse_cards("Kc Qd 2h").unwrap();
    let (ak, jt) = (hand("AsKs"), hand("JhTh"));
    c.bench_function("equity flop 1k trials", |b| {
        b.iter(|| calc.calculate_equity(&ak, &jt, &board, black_box(1_000)).unwrap())
    });
}

fn batch_equity(c: &mut Criterion) {
    let calc = EquityCalculator::seeded(1);
    let pairs: Vec<(Hole, Hole)> = [
        ("AsAh", "KsKh"),
        ("AdKd", "QcQh"),
        ("7c7d", "AhQs"),
        ("Jc Tc", "9s9h"),
    ]
    .iter()
    .map(|(a, b)| (hand(a), hand(b)))
    .collect();
    c.bench_function("batch 4 pairs x 1k trials", |b| {
        b.iter(|| calc.calculate_equity_batch(&pairs, &[], black_box(1_000)))
    });
}

fn range_equity(c: &mut Criterion) {
    let calc = EquityCalculator::seeded(1);
    let range = parse_range_string("JJ+,AKs");
    let hero = hand("AhKh");
    c.bench_function("range JJ+,AKs x 200 trials", |b| {
        b.iter(|| calc.calculate_range_equity(&hero, &range, &[], black_box(200)).unwrap())
    });
}

criterion_group!(
    benches,
    evaluate_seven_cards,
    preflop_equity,
    flop_equity,
    batch_equity,
    range_equity
);
criterion_main!(benches);
