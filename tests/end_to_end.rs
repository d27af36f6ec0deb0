use pylite::{run, Error};

#[test]
fn arithmetic_precedence() {
    assert_eq!(run("print(3 + 4 * 5)").unwrap(), "23\n");
}

#[test]
fn unary_plus_is_identity_while_unary_minus_coerces_bool() {
    assert_eq!(run("print(+True, -True)").unwrap(), "True -1\n");
}

#[test]
fn keyword_args_and_defaults() {
    let source = "def f(x, y=10):\n    return x + y\nprint(f(1), f(1, 2), f(1, y=5))\n";
    assert_eq!(run(source).unwrap(), "11 3 6\n");
}

#[test]
fn assignment_inside_a_function_writes_to_global() {
    let source = "x = 0\ndef inc():\n    x = x + 1\ninc()\ninc()\nprint(x)\n";
    assert_eq!(run(source).unwrap(), "2\n");
}

#[test]
fn floor_division_and_modulo_round_toward_negative_infinity() {
    assert_eq!(run("print(7 // -2, 7 % -2)").unwrap(), "-4 -1\n");
}

#[test]
fn string_repetition_is_commutative_and_lenient() {
    let source = "a = \"ab\"\nprint(a * 3, 3 * a, a * 0, a * -1)\n";
    assert_eq!(run(source).unwrap(), "ababab ababab  \n");
}

#[test]
fn comparison_chaining_and_cross_type_equality() {
    assert_eq!(run("print(1 < 2 < 3, 1 < 2 > 3, 1 == 1.0)").unwrap(), "True False True\n");
}

#[test]
fn arbitrary_precision_integers_round_trip() {
    let digits = "9".repeat(200);
    let source = format!("print({digits} + 1)");
    let expected = format!("1{}\n", "0".repeat(200));
    assert_eq!(run(&source).unwrap(), expected);
}

#[test]
fn float_results_always_render_six_fractional_digits() {
    assert_eq!(run("print(1 / 4)").unwrap(), "0.250000\n");
    assert_eq!(run("print(1.0)").unwrap(), "1.000000\n");
}

#[test]
fn short_circuit_or_skips_the_right_operand() {
    let source = "\
count = 0
def bump():
    count = count + 1
    return True
def f():
    return True
def g():
    return bump()
f() or g()
print(count)
";
    // `g` (which would increment `count`) must never run because `f()`
    // is already truthy.
    assert_eq!(run(source).unwrap(), "0\n");
}

#[test]
fn short_circuit_and_skips_the_right_operand() {
    let source = "\
count = 0
def f():
    return False
def bump():
    count = count + 1
    return True
def g():
    return bump()
f() and g()
print(count)
";
    assert_eq!(run(source).unwrap(), "0\n");
}

#[test]
fn comparison_chain_evaluates_shared_operand_once() {
    let source = "\
count = 0
def b():
    count = count + 1
    return 2
a = 1
c = 3
print(a < b() < c, count)
";
    assert_eq!(run(source).unwrap(), "True 1\n");
}

#[test]
fn default_expressions_are_captured_at_definition_time() {
    let source = "\
limit = 10
def f(x=limit):
    return x
limit = 999
print(f())
";
    assert_eq!(run(source).unwrap(), "10\n");
}

#[test]
fn while_loop_break_and_continue() {
    let source = "\
i = 0
total = 0
while i < 10:
    i = i + 1
    if i == 5:
        continue
    if i == 8:
        break
    total = total + i
print(total, i)
";
    // 1+2+3+4 (5 skipped) +6+7 = 23, loop stops at i == 8
    assert_eq!(run(source).unwrap(), "23 8\n");
}

#[test]
fn return_propagates_through_an_enclosing_while_loop() {
    let source = "\
def first_even(n):
    i = 0
    while i < n:
        if i % 2 == 0:
            return i
        i = i + 1
    return -1
print(first_even(7))
";
    assert_eq!(run(source).unwrap(), "0\n");
}

#[test]
fn format_strings_splice_values_and_unescape_braces() {
    let source = "x = 3\nprint(f\"{{literal}} x={x}\")\n";
    assert_eq!(run(source).unwrap(), "{literal} x=3\n");
}

#[test]
fn builtins_convert_between_value_kinds() {
    let source = "print(int(\"12abc\"), float(\"1.5\"), str(True), bool(\"\"))\n";
    assert_eq!(run(source).unwrap(), "12 1.500000 True False\n");
}

#[test]
fn call_binding_failure_is_lenient_none() {
    let source = "\
def f(a, b):
    return a + b
print(f(1, 2, 3))
print(f(a=1, z=2))
";
    assert_eq!(run(source).unwrap(), "None\nNone\n");
}

#[test]
fn unknown_callee_yields_none() {
    assert_eq!(run("print(mystery(1, 2))").unwrap(), "None\n");
}

#[test]
fn list_literals_are_outside_the_supported_subset() {
    let err = run("x = [1, 2, 3]\n").unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}
