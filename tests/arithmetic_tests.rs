use befunge::interpreter::engine::Interpreter;

fn output_of(program: &str) -> String {
    let mut interpreter = Interpreter::seeded(0);
    interpreter.run(program);
    interpreter.output().to_string()
}

#[test]
fn test_binary_operand_order() {
    assert_eq!(output_of("73+.@"), "10");
    assert_eq!(output_of("73-.@"), "4");
    assert_eq!(output_of("37-.@"), "-4");
    assert_eq!(output_of("73*.@"), "21");
    assert_eq!(output_of("73/.@"), "2");
    assert_eq!(output_of("73%.@"), "1");
}

#[test]
fn test_division_by_zero_yields_zero() {
    assert_eq!(output_of("70/.@"), "0");
    assert_eq!(output_of("70%.@"), "0");
    // the run carries on afterwards
    assert_eq!(output_of("90/5+.@"), "5");
}

#[test]
fn test_negative_division_truncates() {
    // 0 - 7 = -7
    assert_eq!(output_of("07-2/.@"), "-3");
    assert_eq!(output_of("07-2%.@"), "-1");
}

#[test]
fn test_compare() {
    assert_eq!(output_of("52`.@"), "1");
    assert_eq!(output_of("25`.@"), "0");
    assert_eq!(output_of("55`.@"), "0");
}

#[test]
fn test_logical_not() {
    assert_eq!(output_of("0!.@"), "1");
    assert_eq!(output_of("3!.@"), "0");
    assert_eq!(output_of("!.@"), "1");
}

#[test]
fn test_stack_shuffles() {
    assert_eq!(output_of("5:*.@"), "25");
    assert_eq!(output_of("12\\..@"), "12");
    assert_eq!(output_of("12..@"), "21");
    assert_eq!(output_of("12$.@"), "1");
    assert_eq!(output_of(":+.@"), "0");
}

#[test]
fn test_underflow_in_arithmetic() {
    // only one operand: a = 0, b = 4
    assert_eq!(output_of("4-.@"), "-4");
    assert_eq!(output_of("+++.@"), "0");
}

#[test]
fn test_large_values() {
    // 9^8 = 43046721
    assert_eq!(output_of("9::::::::*******.@"), "43046721");
}
