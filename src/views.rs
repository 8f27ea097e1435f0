/// HTML page with a form that posts `numbers` to `/add`.
#[must_use]
pub fn index_form() -> &'static str {
    r#"<!DOCTYPE html>
<html>
<head><title>String Calculator</title></head>
<body>
    <form action="/add" method="POST">
        <input name="numbers">
        <input type="submit" value="Calculate">
    </form>
</body>
</html>
"#
}
