use holder_types::{
    read_all, read_value, Calculator, HolderError, NumericHolder, StringComposer, TextHolder,
    ValueProvider,
};

fn describe<P: ValueProvider<T>, T: std::fmt::Debug>(provider: &P) -> String {
    format!("{:?}", provider.value())
}

#[test]
fn default_numeric_reads_zero() {
    assert_eq!(NumericHolder::default().value(), 0.0);
}

#[test]
fn numeric_reads_initial_value() {
    assert_eq!(NumericHolder::new(42.0).value(), 42.0);
}

#[test]
fn text_reads_initial_value() {
    assert_eq!(TextHolder::new("hello").value(), "hello");
}

#[test]
fn default_text_reads_empty() {
    assert_eq!(TextHolder::default().value(), "");
}

#[test]
fn unrelated_holders_share_the_capability() {
    assert_eq!(describe(&NumericHolder::new(1.5)), "1.5");
    assert_eq!(describe(&TextHolder::new("x")), "\"x\"");
}

#[test]
fn heterogeneous_numeric_providers() {
    let mut first = NumericHolder::new(1.0);
    let second = Calculator::new(2.0);
    first.stored_value = 10.0;

    let providers: Vec<&dyn ValueProvider<f64>> = vec![&first, &second];
    assert_eq!(read_all(&providers), vec![10.0, 2.0]);
}

#[test]
fn boxed_text_provider() {
    let provider: Box<dyn ValueProvider<String>> = Box::new(StringComposer::new("boxed"));
    assert_eq!(read_value(provider.as_ref()), "boxed");
}

#[test]
fn parse_error_exposes_source() {
    let err = "1.2.3".parse::<NumericHolder>().unwrap_err();
    let HolderError::InvalidNumber { input, .. } = &err;
    assert_eq!(input, "1.2.3");
    assert!(std::error::Error::source(&err).is_some());
}
