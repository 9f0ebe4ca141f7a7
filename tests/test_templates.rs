use workflow_gen::templates::*;

#[test]
fn test_every_type_has_a_template() {
    for label in WORKFLOW_TYPES {
        assert!(!template_for(label).is_empty(), "empty template for {label}");
    }
}

#[test]
fn test_templates_are_distinct() {
    for (i, (label_a, body_a)) in TEMPLATES.iter().enumerate() {
        for (label_b, body_b) in &TEMPLATES[i + 1..] {
            assert_ne!(body_a, body_b, "{label_a} and {label_b} share a template");
        }
    }
}

#[test]
fn test_table_order_matches_picker_order() {
    let table_labels: Vec<&str> = TEMPLATES.iter().map(|(label, _)| *label).collect();
    assert_eq!(table_labels, WORKFLOW_TYPES);
}

#[test]
fn test_unknown_type_yields_empty() {
    assert_eq!(template_for("Rust"), "");
    assert_eq!(template_for("django"), "");
    assert_eq!(template_for(""), "");
}

#[test]
fn test_django_template_contents() {
    let body = template_for("Django");
    assert!(body.starts_with("name: Django CI Workflow\n"));
    assert!(body.contains("image: postgres:13"));
    assert!(body.contains("POSTGRES_DB: test_db"));
    assert!(body.contains("- 5432:5432"));
    assert!(body.contains("python manage.py migrate"));
    assert!(body.contains("python manage.py test"));
}

#[test]
fn test_php_template_contents() {
    let body = template_for("PHP");
    assert!(body.contains("uses: shivammathur/setup-php@v2"));
    assert!(body.contains("php-version: '8.0'"));
    assert!(body.contains("composer install"));
    assert!(body.contains("vendor/bin/phpunit"));
}

#[test]
fn test_firebase_template_contents() {
    let body = template_for("HTML/CSS with Firebase");
    assert!(body.contains("curl -sL https://firebase.tools | bash"));
    assert!(body.contains("firebase deploy --token #token"));
    assert!(body.contains("FIREBASE_TOKEN:"));
}

#[test]
fn test_static_site_template_contents() {
    let body = template_for("Static Website");
    assert!(body.contains("node-version: '16'"));
    assert!(body.contains("uses: peaceiris/actions-gh-pages@v3"));
    assert!(body.contains("publish_dir: ./"));
}

#[test]
fn test_templates_end_with_newline() {
    for (label, body) in TEMPLATES {
        assert!(body.ends_with('\n'), "{label} template missing trailing newline");
    }
}

#[test]
fn test_python_template_byte_exact() {
    let expected = r#"name: Python CI Workflow
on:
  push:
    branches:
      - main
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - name: Set up Python
        uses: actions/setup-python@v2
        with:
          python-version: '3.9'
      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          pip install -r requirements.txt
      - name: Run tests
        run: |
          pytest
"#;
    assert_eq!(template_for("Python"), expected);
}
