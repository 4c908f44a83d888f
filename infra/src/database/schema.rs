//! Table definitions

/// Tables created by [`STATEMENTS`], in creation order
pub const TABLES: &[&str] = &[
    "users",
    "children",
    "child_parent_links",
    "avisos",
    "rotinas",
    "saude_records",
    "calendario_eventos",
];

/// DDL run by `DatabasePool::create_schema`; every statement is idempotent
pub const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        hashed_password TEXT NOT NULL,
        full_name TEXT NOT NULL,
        user_type TEXT NOT NULL,
        active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_users_username ON users (username)",
    r#"
    CREATE TABLE IF NOT EXISTS children (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birth_date TEXT NOT NULL,
        classroom TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS child_parent_links (
        parent_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        child_id INTEGER NOT NULL REFERENCES children (id) ON DELETE CASCADE,
        PRIMARY KEY (parent_id, child_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS avisos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT,
        author_id INTEGER NOT NULL REFERENCES users (id),
        target_classroom TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rotinas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        child_id INTEGER NOT NULL REFERENCES children (id),
        alimentacao TEXT NOT NULL,
        sono TEXT NOT NULL,
        atividades TEXT NOT NULL,
        observacoes TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_rotinas_child ON rotinas (child_id)",
    r#"
    CREATE TABLE IF NOT EXISTS saude_records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        child_id INTEGER NOT NULL REFERENCES children (id),
        medicacao TEXT,
        sintomas TEXT,
        observacoes TEXT,
        temperatura REAL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_saude_records_child ON saude_records (child_id)",
    r#"
    CREATE TABLE IF NOT EXISTS calendario_eventos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT,
        all_day INTEGER NOT NULL DEFAULT 0,
        recurrence TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_calendario_eventos_start ON calendario_eventos (start_date)",
];
