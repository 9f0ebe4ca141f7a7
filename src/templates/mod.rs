//! Workflow template bodies, one per supported project type.
//!
//! Bodies are emitted verbatim, placeholder tokens included — the tool never
//! validates or rewrites the generated YAML.

pub const DJANGO: &str = r#"name: Django CI Workflow
on:
  push:
    branches:
      - main
jobs:
  test:
    runs-on: ubuntu-latest
    services:
      postgres:
        image: postgres:13
        env:
          POSTGRES_USER: postgres
          POSTGRES_PASSWORD: password
          POSTGRES_DB: test_db
        ports:
          - 5432:5432
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
      - name: Run migrations
        run: |
          python manage.py migrate
      - name: Run tests
        run: |
          python manage.py test
"#;

pub const PYTHON: &str = r#"name: Python CI Workflow
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

pub const FIREBASE: &str = r#"name: HTML/CSS with Firebase Deploy
on:
  push:
    branches:
      - main
jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - name: Set up Firebase CLI
        run: |
          curl -sL https://firebase.tools | bash
      - name: Deploy to Firebase
        run: |
          firebase deploy --token #token
        env:
          FIREBASE_TOKEN: #ur token here
"#;

pub const PHP: &str = r#"name: PHP CI Workflow
on:
  push:
    branches:
      - main
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - name: Set up PHP
        uses: shivammathur/setup-php@v2
        with:
          php-version: '8.0'
      - name: Install dependencies
        run: |
          composer install
      - name: Run tests
        run: |
          vendor/bin/phpunit
"#;

pub const STATIC_SITE: &str = r#"name: Deploy Static Website to GitHub Pages
on:
  push:
    branches:
      - main
jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - name: Set up Node.js (required for GitHub Pages)
        uses: actions/setup-node@v2
        with:
          node-version: '16'
      - name: Build website (optional if using a build tool like webpack)
        run: |
          # You can add a build step if your site requires it, e.g., using npm run build
          echo "Build step if needed"
      - name: Deploy to GitHub Pages
        uses: peaceiris/actions-gh-pages@v3
        with:
          github_token: #Ur github token
          publish_dir: ./ # or the directory containing your static files
"#;

/// Project types in the order they are presented to the operator.
pub const WORKFLOW_TYPES: [&str; 5] =
    ["Django", "Python", "HTML/CSS with Firebase", "PHP", "Static Website"];

/// Static label → template table; the only dispatch in the system.
pub const TEMPLATES: [(&str, &str); 5] = [
    ("Django", DJANGO),
    ("Python", PYTHON),
    ("HTML/CSS with Firebase", FIREBASE),
    ("PHP", PHP),
    ("Static Website", STATIC_SITE),
];

/// Returns the template body for `project_type`, or `""` for any label
/// outside the table.
pub fn template_for(project_type: &str) -> &'static str {
    TEMPLATES.iter().find(|(label, _)| *label == project_type).map_or("", |(_, body)| body)
}
