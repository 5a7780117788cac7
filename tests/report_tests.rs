//! Report formatting tests.

use rootsum::{Engine, Labels, Locale, PipelineConfig};

fn report(cfg: PipelineConfig) -> String {
    let engine = Engine::new(cfg).expect("valid config");
    let mut out = Vec::new();
    engine.run_and_report(&mut out).expect("report written");
    String::from_utf8(out).expect("utf-8 report")
}

#[test]
fn test_default_report_is_four_fixed_lines() {
    assert_eq!(
        report(PipelineConfig::default()),
        "Original numbers: [1, 4, 9, 16, 25]\n\
         Square roots: [1.0, 2.0, 3.0, 4.0, 5.0]\n\
         Filtered square roots (greater than 2): [3.0, 4.0, 5.0]\n\
         Sum of filtered square roots: 12.0\n"
    );
}

#[test]
fn test_russian_report_uses_original_labels() {
    let text = report(PipelineConfig::default().with_locale(Locale::Ru));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Исходные числа: [1, 4, 9, 16, 25]",
            "Квадратные корни: [1.0, 2.0, 3.0, 4.0, 5.0]",
            "Отфильтрованные квадратные корни (больше 2): [3.0, 4.0, 5.0]",
            "Сумма отфильтрованных квадратных корней: 12.0",
        ]
    );
}

#[test]
fn test_empty_filter_result_prints_empty_list() {
    let text = report(PipelineConfig::default().with_threshold(5.0));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[2], "Filtered square roots (greater than 5): []");
    assert_eq!(lines[3], "Sum of filtered square roots: 0.0");
}

#[test]
fn test_custom_labels_render_in_order() {
    let engine = Engine::new(PipelineConfig::default()).unwrap();
    let labels = Labels {
        original: "a".into(),
        roots: "b".into(),
        filtered: "c".into(),
        total: "d".into(),
    };
    let text = engine.run().unwrap().render(&labels);
    let prefixes: Vec<&str> = text
        .lines()
        .map(|l| l.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(prefixes, vec!["a", "b", "c", "d"]);
}
