//! Contains types to represent the database pool.

use sea_orm::DbConn;

/// Represents the database of the API.
pub struct Database {
    /// The SQL database connection pool. This can also be a testing database
    /// [`DbConn::MockDatabaseConnection`].
    pub sql_conn: DbConn,
}

#[inline(always)]
#[cfg(feature = "test")]
const fn empty_query_results() -> std::iter::Empty<std::iter::Empty<sea_orm::MockRow>> {
    std::iter::empty::<std::iter::Empty<sea_orm::MockRow>>()
}

impl Database {
    /// Returns the database from the URL to the SQL database.
    pub async fn from_db_url(db_url: String) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self { sql_conn })
    }

    /// Returns the database from the backend of the SQL database, with initial data for
    /// the mock database.
    ///
    /// This is used for testing, by simulating an SQL database.
    #[cfg(feature = "test")]
    pub fn from_mock_db_with_initial<I1, I2>(
        db_backend: sea_orm::DbBackend,
        query_results: I1,
        exec_results: I2,
    ) -> Self
    where
        I1: IntoIterator<Item: IntoIterator<Item: sea_orm::IntoMockRow>>,
        I2: IntoIterator<Item = sea_orm::MockExecResult>,
    {
        let sql_conn = sea_orm::MockDatabase::new(db_backend)
            .append_query_results(query_results)
            .append_exec_results(exec_results)
            .into_connection();
        Self { sql_conn }
    }

    /// Returns the database from the backend of the SQL database, with initial query results
    /// for the mock database.
    ///
    /// This is used for testing, by simulating an SQL database.
    #[cfg(feature = "test")]
    pub fn from_mock_db_with_query_results<I>(db_backend: sea_orm::DbBackend, query_results: I) -> Self
    where
        I: IntoIterator<Item: IntoIterator<Item: sea_orm::IntoMockRow>>,
    {
        Self::from_mock_db_with_initial(db_backend, query_results, [])
    }

    /// Returns the database from the backend of the SQL database, with no data in
    /// the mock database.
    ///
    /// This is used for testing, by simulating an SQL database.
    #[cfg(feature = "test")]
    pub fn from_mock_db(db_backend: sea_orm::DbBackend) -> Self {
        Self::from_mock_db_with_initial(db_backend, empty_query_results(), [])
    }
}

// For some reasons, sea_orm::DbConn doesn't implement Clone
impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            sql_conn: match &self.sql_conn {
                #[cfg(feature = "mysql")]
                sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(conn.clone())
                }
                #[cfg(feature = "test")]
                sea_orm::DatabaseConnection::MockDatabaseConnection(conn) => {
                    sea_orm::DatabaseConnection::MockDatabaseConnection(conn.clone())
                }
                #[cfg(feature = "postgres")]
                sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(conn.clone())
                }
                #[cfg(feature = "sqlite")]
                sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(conn.clone())
                }
                sea_orm::DatabaseConnection::Disconnected => {
                    sea_orm::DatabaseConnection::Disconnected
                }
            },
        }
    }
}
