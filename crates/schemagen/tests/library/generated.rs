//! Code generated by schemagen. DO NOT EDIT.

pub mod db {
    use schemagen_runtime::prelude::*;
    pub const TABLE_AUTHOR: &str = "app.author";
    pub const TABLE_AUTHOR_COLUMN_ID: &str = "id";
    pub const TABLE_AUTHOR_COLUMN_NAME: &str = "name";
    pub const TABLE_AUTHOR_COLUMNS: &[&str] = &[
        TABLE_AUTHOR_COLUMN_ID,
        TABLE_AUTHOR_COLUMN_NAME,
    ];
    #[derive(Debug, Clone, Default)]
    pub struct AuthorEntity {
        pub id: i64,
        pub name: String,
        pub books: Vec<BookEntity>,
    }
    impl Entity for AuthorEntity {
        fn props<S: AsRef<str>>(
            &mut self,
            cols: &[S],
        ) -> Result<Vec<&mut dyn ScanTarget>, Error> {
            let Self { id: prop_id, name: prop_name, .. } = self;
            let mut prop_id = Some(prop_id);
            let mut prop_name = Some(prop_name);
            let mut props: Vec<&mut dyn ScanTarget> = Vec::with_capacity(cols.len());
            for col in cols {
                let col = col.as_ref();
                match col {
                    TABLE_AUTHOR_COLUMN_ID => match prop_id.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    TABLE_AUTHOR_COLUMN_NAME => match prop_name.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    _ => return Err(Error::UnknownColumn(col.to_string())),
                }
            }
            Ok(props)
        }
    }
    pub fn scan_author_rows(rows: Box<dyn Rows>) -> Result<Vec<AuthorEntity>, Error> {
        scan_all(rows, TABLE_AUTHOR_COLUMNS)
    }
    /// Reads entities from a result set. Not safe for concurrent use.
    pub struct AuthorIterator {
        rows: Box<dyn Rows>,
        cols: Option<Vec<String>>,
        #[allow(dead_code)]
        expr: AuthorFindExpr,
    }
    impl AuthorIterator {
        pub fn new(rows: Box<dyn Rows>, expr: AuthorFindExpr) -> Self {
            Self { rows, cols: None, expr }
        }
        pub fn advance(&mut self) -> bool {
            self.rows.advance()
        }
        pub fn close(&mut self) -> Result<(), Error> {
            self.rows.close()
        }
        pub fn err(&mut self) -> Option<Error> {
            self.rows.err()
        }
        /// Column names of the result set, read once.
        pub fn columns(&mut self) -> Result<&[String], Error> {
            let cols = match self.cols.take() {
                Some(cols) => cols,
                None => self.rows.columns()?,
            };
            Ok(self.cols.insert(cols).as_slice())
        }
        /// The entity in the current row, with fetched joins.
        pub fn author(&mut self) -> Result<AuthorEntity, Error> {
            let cols = self.columns()?.to_vec();
            let mut ent = AuthorEntity::default();
            self.rows.scan(&mut ent.props(&cols)?)?;
            Ok(ent)
        }
    }
    #[derive(Debug, Clone, Default)]
    pub struct AuthorFilter {
        pub id: Option<Filter<i64>>,
        pub name: Option<Filter<String>>,
    }
    impl FilterSet for AuthorFilter {
        fn write_sql(&self, comp: &mut Composer, alias: &str) -> Result<bool, Error> {
            let mut clause = comp.clause("", " AND ");
            if let Some(filter) = &self.id {
                clause.filter(alias, TABLE_AUTHOR_COLUMN_ID, filter);
            }
            if let Some(filter) = &self.name {
                clause.filter(alias, TABLE_AUTHOR_COLUMN_NAME, filter);
            }
            Ok(clause.finish())
        }
    }
    pub type AuthorCriteria = Criteria<AuthorFilter>;
    #[derive(Debug, Clone, Default)]
    pub struct AuthorFindExpr {
        pub filter: Option<AuthorCriteria>,
        pub offset: i64,
        pub limit: i64,
        pub columns: Vec<String>,
        pub order_by: Vec<RowOrder>,
    }
    #[derive(Debug, Clone, Default)]
    pub struct AuthorJoin {
        pub on: Option<AuthorCriteria>,
        pub filter: Option<AuthorCriteria>,
        pub fetch: bool,
        pub kind: JoinKind,
    }
    #[derive(Debug, Clone, Default)]
    pub struct AuthorCountExpr {
        pub filter: Option<AuthorCriteria>,
    }
    #[derive(Debug, Clone, Default)]
    pub struct AuthorPatch {
        pub name: Option<String>,
    }
    pub struct AuthorRepositoryBase<E: Executor> {
        pub table: String,
        pub columns: Vec<String>,
        pub db: E,
    }
    impl<E: Executor> AuthorRepositoryBase<E> {
        pub fn new(db: E) -> Self {
            Self {
                table: TABLE_AUTHOR.to_string(),
                columns: TABLE_AUTHOR_COLUMNS
                    .iter()
                    .map(|column| column.to_string())
                    .collect(),
                db,
            }
        }
        fn write_insert(&self, comp: &mut Composer, ent: &AuthorEntity) {
            let mut columns: Vec<&str> = vec![];
            let mut values: Vec<Value> = vec![];
            let value = Value::from(ent.id.clone());
            if !value.is_zero() {
                columns.push(TABLE_AUTHOR_COLUMN_ID);
                values.push(value);
            }
            columns.push(TABLE_AUTHOR_COLUMN_NAME);
            values.push(Value::from(ent.name.clone()));
            comp.write_str("INSERT INTO ");
            comp.write_str(&self.table);
            if columns.is_empty() {
                comp.write_str(" DEFAULT VALUES");
            } else {
                comp.write_str(" (");
                comp.write_str(&columns.join(", "));
                comp.write_str(") VALUES (");
                for (i, value) in values.into_iter().enumerate() {
                    if i > 0 {
                        comp.write_str(", ");
                    }
                    comp.bind(value);
                }
                comp.write_str(")");
            }
        }
        pub fn insert_query(
            &self,
            ent: &AuthorEntity,
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            self.write_insert(&mut comp, ent);
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn insert(&self, ent: &AuthorEntity) -> Result<AuthorEntity, Error> {
            let (sql, args) = self.insert_query(ent)?;
            trace_query("insert", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        pub fn find_query(
            &self,
            expr: &AuthorFindExpr,
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            comp.write_str("SELECT ");
            if expr.columns.is_empty() {
                comp.write_columns("t0", &self.columns);
            } else {
                comp.write_columns("t0", &expr.columns);
            }
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            comp.write_str(" AS t0");
            let mut clause = comp.clause(" WHERE ", " AND ");
            clause.criteria(expr.filter.as_ref(), "t0")?;
            clause.finish();
            comp.write_order_by("t0", &expr.order_by);
            comp.write_limit_offset(expr.limit, expr.offset);
            Ok(comp.into_parts())
        }
        pub fn find_iter(&self, expr: &AuthorFindExpr) -> Result<AuthorIterator, Error> {
            let (sql, args) = self.find_query(expr)?;
            trace_query("find", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            Ok(AuthorIterator::new(rows, expr.clone()))
        }
        pub fn find(&self, expr: &AuthorFindExpr) -> Result<Vec<AuthorEntity>, Error> {
            let mut iter = self.find_iter(expr)?;
            let mut ents = vec![];
            while iter.advance() {
                ents.push(iter.author()?);
            }
            if let Some(err) = iter.err() {
                return Err(err);
            }
            iter.close()?;
            Ok(ents)
        }
        pub fn find_one_by_id(&self, id: i64) -> Result<AuthorEntity, Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_AUTHOR_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("SELECT ");
            comp.write_columns("", &self.columns);
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            let (sql, args) = comp.into_parts();
            trace_query("find_one_by_id", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        fn write_patch(set: &mut Clause<'_>, patch: &AuthorPatch) -> Result<(), Error> {
            let value = Value::from(patch.name.clone());
            if !value.is_null() {
                set.assign(TABLE_AUTHOR_COLUMN_NAME, value);
            }
            if set.is_empty() {
                return Err(Error::EmptyPatch);
            }
            Ok(())
        }
        pub fn update_one_by_id_query(
            &self,
            id: i64,
            patch: &AuthorPatch,
        ) -> Result<(String, Vec<Value>), Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_AUTHOR_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("UPDATE ");
            comp.write_str(&self.table);
            let mut set = comp.clause(" SET ", ", ");
            Self::write_patch(&mut set, patch)?;
            set.finish();
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn update_one_by_id(
            &self,
            id: i64,
            patch: &AuthorPatch,
        ) -> Result<AuthorEntity, Error> {
            let (sql, args) = self.update_one_by_id_query(id, patch)?;
            trace_query("update_one_by_id", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        /// Inserts `ent`, applying `patch` to the row conflicting on
        /// `conflict` instead. An empty patch leaves the row untouched.
        pub fn upsert_query(
            &self,
            ent: &AuthorEntity,
            patch: &AuthorPatch,
            conflict: &[&str],
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            self.write_insert(&mut comp, ent);
            comp.write_str(" ON CONFLICT");
            if !conflict.is_empty() {
                comp.write_str(" (");
                comp.write_str(&conflict.join(", "));
                comp.write_str(")");
            }
            let checkpoint = comp.checkpoint();
            comp.write_str(" DO UPDATE");
            let mut set = comp.clause(" SET ", ", ");
            match Self::write_patch(&mut set, patch) {
                Ok(()) => {
                    set.finish();
                }
                Err(Error::EmptyPatch) => {
                    comp.rollback(checkpoint);
                    comp.write_str(" DO NOTHING");
                }
                Err(err) => return Err(err),
            }
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn upsert(
            &self,
            ent: &AuthorEntity,
            patch: &AuthorPatch,
            conflict: &[&str],
        ) -> Result<AuthorEntity, Error> {
            let (sql, args) = self.upsert_query(ent, patch, conflict)?;
            trace_query("upsert", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        pub fn count_query(
            &self,
            expr: &AuthorCountExpr,
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            comp.write_str("SELECT COUNT(*)");
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            comp.write_str(" AS t0");
            let mut clause = comp.clause(" WHERE ", " AND ");
            clause.criteria(expr.filter.as_ref(), "t0")?;
            clause.finish();
            Ok(comp.into_parts())
        }
        pub fn count(&self, expr: &AuthorCountExpr) -> Result<i64, Error> {
            let (sql, args) = self.count_query(expr)?;
            trace_query("count", &sql, &args);
            let mut rows = self.db.query(&sql, &args)?;
            let mut count = 0i64;
            if rows.advance() {
                let mut props: [&mut dyn ScanTarget; 1] = [&mut count];
                rows.scan(&mut props)?;
            }
            if let Some(err) = rows.err() {
                return Err(err);
            }
            rows.close()?;
            Ok(count)
        }
        pub fn delete_one_by_id(&self, id: i64) -> Result<u64, Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_AUTHOR_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("DELETE FROM ");
            comp.write_str(&self.table);
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            let (sql, args) = comp.into_parts();
            trace_query("delete_one_by_id", &sql, &args);
            self.db.execute(&sql, &args)
        }
    }
    pub const TABLE_BOOK: &str = "app.book";
    pub const TABLE_BOOK_COLUMN_ID: &str = "id";
    pub const TABLE_BOOK_COLUMN_TITLE: &str = "title";
    pub const TABLE_BOOK_COLUMN_EDITOR_ID: &str = "editor_id";
    pub const TABLE_BOOK_COLUMN_ACTIVE: &str = "active";
    pub const TABLE_BOOK_COLUMN_UPDATED_AT: &str = "updated_at";
    pub const TABLE_BOOK_COLUMNS: &[&str] = &[
        TABLE_BOOK_COLUMN_ID,
        TABLE_BOOK_COLUMN_TITLE,
        TABLE_BOOK_COLUMN_EDITOR_ID,
        TABLE_BOOK_COLUMN_ACTIVE,
        TABLE_BOOK_COLUMN_UPDATED_AT,
    ];
    #[derive(Debug, Clone, Default)]
    pub struct BookEntity {
        pub id: i64,
        pub title: String,
        pub editor_id: Option<i64>,
        pub active: bool,
        pub updated_at: Option<String>,
        pub editor: Option<Box<AuthorEntity>>,
    }
    impl Entity for BookEntity {
        fn props<S: AsRef<str>>(
            &mut self,
            cols: &[S],
        ) -> Result<Vec<&mut dyn ScanTarget>, Error> {
            let Self {
                id: prop_id,
                title: prop_title,
                editor_id: prop_editor_id,
                active: prop_active,
                updated_at: prop_updated_at,
                ..
            } = self;
            let mut prop_id = Some(prop_id);
            let mut prop_title = Some(prop_title);
            let mut prop_editor_id = Some(prop_editor_id);
            let mut prop_active = Some(prop_active);
            let mut prop_updated_at = Some(prop_updated_at);
            let mut props: Vec<&mut dyn ScanTarget> = Vec::with_capacity(cols.len());
            for col in cols {
                let col = col.as_ref();
                match col {
                    TABLE_BOOK_COLUMN_ID => match prop_id.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    TABLE_BOOK_COLUMN_TITLE => match prop_title.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    TABLE_BOOK_COLUMN_EDITOR_ID => match prop_editor_id.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    TABLE_BOOK_COLUMN_ACTIVE => match prop_active.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    TABLE_BOOK_COLUMN_UPDATED_AT => match prop_updated_at.take() {
                        Some(prop) => props.push(prop),
                        None => return Err(Error::DuplicateColumn(col.to_string())),
                    },
                    _ => return Err(Error::UnknownColumn(col.to_string())),
                }
            }
            Ok(props)
        }
    }
    pub fn scan_book_rows(rows: Box<dyn Rows>) -> Result<Vec<BookEntity>, Error> {
        scan_all(rows, TABLE_BOOK_COLUMNS)
    }
    /// Reads entities from a result set. Not safe for concurrent use.
    pub struct BookIterator {
        rows: Box<dyn Rows>,
        cols: Option<Vec<String>>,
        expr: BookFindExpr,
    }
    impl BookIterator {
        pub fn new(rows: Box<dyn Rows>, expr: BookFindExpr) -> Self {
            Self { rows, cols: None, expr }
        }
        pub fn advance(&mut self) -> bool {
            self.rows.advance()
        }
        pub fn close(&mut self) -> Result<(), Error> {
            self.rows.close()
        }
        pub fn err(&mut self) -> Option<Error> {
            self.rows.err()
        }
        /// Column names of the result set, read once.
        pub fn columns(&mut self) -> Result<&[String], Error> {
            let cols = match self.cols.take() {
                Some(cols) => cols,
                None => self.rows.columns()?,
            };
            Ok(self.cols.insert(cols).as_slice())
        }
        /// The entity in the current row, with fetched joins.
        pub fn book(&mut self) -> Result<BookEntity, Error> {
            let mut join_editor = match &self.expr.join_editor {
                Some(join) if join.fetch => Some(vec![Value::Null; TABLE_AUTHOR_COLUMNS.len()]),
                _ => None,
            };
            let cols = self.columns()?.to_vec();
            let mut joined = 0;
            if let Some(values) = &join_editor {
                joined += values.len();
            }
            let own = cols
                .len()
                .checked_sub(joined)
                .ok_or(Error::ColumnCount {
                    expected: joined,
                    found: cols.len(),
                })?;
            let mut ent = BookEntity::default();
            {
                let mut props = ent.props(&cols[..own])?;
                if let Some(values) = &mut join_editor {
                    props.extend(values.iter_mut().map(|value| value as &mut dyn ScanTarget));
                }
                self.rows.scan(&mut props)?;
            }
            if let Some(values) = join_editor {
                ent.editor = scan_joined::<AuthorEntity, _>(TABLE_AUTHOR_COLUMNS, values)?
                    .map(Box::new);
            }
            Ok(ent)
        }
    }
    #[derive(Debug, Clone, Default)]
    pub struct BookFilter {
        pub id: Option<Filter<i64>>,
        pub title: Option<Filter<String>>,
        pub editor_id: Option<Filter<i64>>,
        pub active: Option<Filter<bool>>,
        pub updated_at: Option<Filter<String>>,
    }
    impl FilterSet for BookFilter {
        fn write_sql(&self, comp: &mut Composer, alias: &str) -> Result<bool, Error> {
            let mut clause = comp.clause("", " AND ");
            if let Some(filter) = &self.id {
                clause.filter(alias, TABLE_BOOK_COLUMN_ID, filter);
            }
            if let Some(filter) = &self.title {
                clause.filter(alias, TABLE_BOOK_COLUMN_TITLE, filter);
            }
            if let Some(filter) = &self.editor_id {
                clause.filter(alias, TABLE_BOOK_COLUMN_EDITOR_ID, filter);
            }
            if let Some(filter) = &self.active {
                clause.filter(alias, TABLE_BOOK_COLUMN_ACTIVE, filter);
            }
            if let Some(filter) = &self.updated_at {
                clause.filter(alias, TABLE_BOOK_COLUMN_UPDATED_AT, filter);
            }
            Ok(clause.finish())
        }
    }
    pub type BookCriteria = Criteria<BookFilter>;
    #[derive(Debug, Clone, Default)]
    pub struct BookFindExpr {
        pub filter: Option<BookCriteria>,
        pub offset: i64,
        pub limit: i64,
        pub columns: Vec<String>,
        pub order_by: Vec<RowOrder>,
        pub join_editor: Option<AuthorJoin>,
    }
    #[derive(Debug, Clone, Default)]
    pub struct BookJoin {
        pub on: Option<BookCriteria>,
        pub filter: Option<BookCriteria>,
        pub fetch: bool,
        pub kind: JoinKind,
        pub join_editor: Option<Box<AuthorJoin>>,
    }
    #[derive(Debug, Clone, Default)]
    pub struct BookCountExpr {
        pub filter: Option<BookCriteria>,
        pub join_editor: Option<AuthorJoin>,
    }
    #[derive(Debug, Clone, Default)]
    pub struct BookPatch {
        pub title: Option<String>,
        pub editor_id: Option<i64>,
        pub active: Option<bool>,
        pub updated_at: Option<String>,
    }
    pub struct BookRepositoryBase<E: Executor> {
        pub table: String,
        pub columns: Vec<String>,
        pub db: E,
    }
    impl<E: Executor> BookRepositoryBase<E> {
        pub fn new(db: E) -> Self {
            Self {
                table: TABLE_BOOK.to_string(),
                columns: TABLE_BOOK_COLUMNS.iter().map(|column| column.to_string()).collect(),
                db,
            }
        }
        fn write_insert(&self, comp: &mut Composer, ent: &BookEntity) {
            let mut columns: Vec<&str> = vec![];
            let mut values: Vec<Value> = vec![];
            let value = Value::from(ent.id.clone());
            if !value.is_zero() {
                columns.push(TABLE_BOOK_COLUMN_ID);
                values.push(value);
            }
            columns.push(TABLE_BOOK_COLUMN_TITLE);
            values.push(Value::from(ent.title.clone()));
            let value = Value::from(ent.editor_id.clone());
            if !value.is_null() {
                columns.push(TABLE_BOOK_COLUMN_EDITOR_ID);
                values.push(value);
            }
            columns.push(TABLE_BOOK_COLUMN_ACTIVE);
            values.push(Value::from(ent.active.clone()));
            let value = Value::from(ent.updated_at.clone());
            if !value.is_null() {
                columns.push(TABLE_BOOK_COLUMN_UPDATED_AT);
                values.push(value);
            }
            comp.write_str("INSERT INTO ");
            comp.write_str(&self.table);
            if columns.is_empty() {
                comp.write_str(" DEFAULT VALUES");
            } else {
                comp.write_str(" (");
                comp.write_str(&columns.join(", "));
                comp.write_str(") VALUES (");
                for (i, value) in values.into_iter().enumerate() {
                    if i > 0 {
                        comp.write_str(", ");
                    }
                    comp.bind(value);
                }
                comp.write_str(")");
            }
        }
        pub fn insert_query(&self, ent: &BookEntity) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            self.write_insert(&mut comp, ent);
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn insert(&self, ent: &BookEntity) -> Result<BookEntity, Error> {
            let (sql, args) = self.insert_query(ent)?;
            trace_query("insert", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        pub fn find_query(
            &self,
            expr: &BookFindExpr,
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            comp.write_str("SELECT ");
            if expr.columns.is_empty() {
                comp.write_columns("t0", &self.columns);
            } else {
                comp.write_columns("t0", &expr.columns);
            }
            if let Some(join) = &expr.join_editor {
                if join.fetch {
                    comp.write_str(", ");
                    comp.write_columns("t1", TABLE_AUTHOR_COLUMNS);
                }
            }
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            comp.write_str(" AS t0");
            if let Some(join) = &expr.join_editor {
                comp.write_join(
                    join.kind,
                    TABLE_AUTHOR,
                    "t1",
                    "t0",
                    &[(TABLE_BOOK_COLUMN_EDITOR_ID, TABLE_AUTHOR_COLUMN_ID)],
                    join.on.as_ref(),
                )?;
            }
            let mut clause = comp.clause(" WHERE ", " AND ");
            clause.criteria(expr.filter.as_ref(), "t0")?;
            if let Some(join) = &expr.join_editor {
                clause.criteria(join.filter.as_ref(), "t1")?;
            }
            clause.finish();
            comp.write_order_by("t0", &expr.order_by);
            comp.write_limit_offset(expr.limit, expr.offset);
            Ok(comp.into_parts())
        }
        pub fn find_iter(&self, expr: &BookFindExpr) -> Result<BookIterator, Error> {
            let (sql, args) = self.find_query(expr)?;
            trace_query("find", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            Ok(BookIterator::new(rows, expr.clone()))
        }
        pub fn find(&self, expr: &BookFindExpr) -> Result<Vec<BookEntity>, Error> {
            let mut iter = self.find_iter(expr)?;
            let mut ents = vec![];
            while iter.advance() {
                ents.push(iter.book()?);
            }
            if let Some(err) = iter.err() {
                return Err(err);
            }
            iter.close()?;
            Ok(ents)
        }
        pub fn find_one_by_id(&self, id: i64) -> Result<BookEntity, Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_BOOK_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("SELECT ");
            comp.write_columns("", &self.columns);
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            let (sql, args) = comp.into_parts();
            trace_query("find_one_by_id", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        fn write_patch(set: &mut Clause<'_>, patch: &BookPatch) -> Result<(), Error> {
            let value = Value::from(patch.title.clone());
            if !value.is_null() {
                set.assign(TABLE_BOOK_COLUMN_TITLE, value);
            }
            let value = Value::from(patch.editor_id.clone());
            if !value.is_null() {
                set.assign(TABLE_BOOK_COLUMN_EDITOR_ID, value);
            }
            let value = Value::from(patch.active.clone());
            if !value.is_null() {
                set.assign(TABLE_BOOK_COLUMN_ACTIVE, value);
            }
            let value = Value::from(patch.updated_at.clone());
            if !value.is_null() {
                set.assign(TABLE_BOOK_COLUMN_UPDATED_AT, value);
            } else {
                set.assign_raw(TABLE_BOOK_COLUMN_UPDATED_AT, "NOW()");
            }
            if set.is_empty() {
                return Err(Error::EmptyPatch);
            }
            Ok(())
        }
        pub fn update_one_by_id_query(
            &self,
            id: i64,
            patch: &BookPatch,
        ) -> Result<(String, Vec<Value>), Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_BOOK_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("UPDATE ");
            comp.write_str(&self.table);
            let mut set = comp.clause(" SET ", ", ");
            Self::write_patch(&mut set, patch)?;
            set.finish();
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn update_one_by_id(
            &self,
            id: i64,
            patch: &BookPatch,
        ) -> Result<BookEntity, Error> {
            let (sql, args) = self.update_one_by_id_query(id, patch)?;
            trace_query("update_one_by_id", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        /// Inserts `ent`, applying `patch` to the row conflicting on
        /// `conflict` instead. An empty patch leaves the row untouched.
        pub fn upsert_query(
            &self,
            ent: &BookEntity,
            patch: &BookPatch,
            conflict: &[&str],
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            self.write_insert(&mut comp, ent);
            comp.write_str(" ON CONFLICT");
            if !conflict.is_empty() {
                comp.write_str(" (");
                comp.write_str(&conflict.join(", "));
                comp.write_str(")");
            }
            let checkpoint = comp.checkpoint();
            comp.write_str(" DO UPDATE");
            let mut set = comp.clause(" SET ", ", ");
            match Self::write_patch(&mut set, patch) {
                Ok(()) => {
                    set.finish();
                }
                Err(Error::EmptyPatch) => {
                    comp.rollback(checkpoint);
                    comp.write_str(" DO NOTHING");
                }
                Err(err) => return Err(err),
            }
            comp.write_str(" RETURNING ");
            comp.write_columns("", &self.columns);
            Ok(comp.into_parts())
        }
        pub fn upsert(
            &self,
            ent: &BookEntity,
            patch: &BookPatch,
            conflict: &[&str],
        ) -> Result<BookEntity, Error> {
            let (sql, args) = self.upsert_query(ent, patch, conflict)?;
            trace_query("upsert", &sql, &args);
            let rows = self.db.query(&sql, &args)?;
            scan_one(rows, &self.columns)
        }
        pub fn count_query(
            &self,
            expr: &BookCountExpr,
        ) -> Result<(String, Vec<Value>), Error> {
            let mut comp = Composer::new();
            comp.write_str("SELECT COUNT(*)");
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            comp.write_str(" AS t0");
            if let Some(join) = &expr.join_editor {
                comp.write_join(
                    join.kind,
                    TABLE_AUTHOR,
                    "t1",
                    "t0",
                    &[(TABLE_BOOK_COLUMN_EDITOR_ID, TABLE_AUTHOR_COLUMN_ID)],
                    join.on.as_ref(),
                )?;
            }
            let mut clause = comp.clause(" WHERE ", " AND ");
            clause.criteria(expr.filter.as_ref(), "t0")?;
            if let Some(join) = &expr.join_editor {
                clause.criteria(join.filter.as_ref(), "t1")?;
            }
            clause.finish();
            Ok(comp.into_parts())
        }
        pub fn count(&self, expr: &BookCountExpr) -> Result<i64, Error> {
            let (sql, args) = self.count_query(expr)?;
            trace_query("count", &sql, &args);
            let mut rows = self.db.query(&sql, &args)?;
            let mut count = 0i64;
            if rows.advance() {
                let mut props: [&mut dyn ScanTarget; 1] = [&mut count];
                rows.scan(&mut props)?;
            }
            if let Some(err) = rows.err() {
                return Err(err);
            }
            rows.close()?;
            Ok(count)
        }
        pub fn delete_one_by_id(&self, id: i64) -> Result<u64, Error> {
            let key = vec![Value::from(id)];
            let key_columns = [TABLE_BOOK_COLUMN_ID];
            let mut comp = Composer::new();
            comp.write_str("DELETE FROM ");
            comp.write_str(&self.table);
            let mut clause = comp.clause(" WHERE ", " AND ");
            for (column, value) in key_columns.into_iter().zip(key) {
                clause.assign(column, value);
            }
            clause.finish();
            let (sql, args) = comp.into_parts();
            trace_query("delete_one_by_id", &sql, &args);
            self.db.execute(&sql, &args)
        }
    }
}
