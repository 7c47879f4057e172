pub mod health;
pub use self::health::health;

pub mod graphql;
pub use self::graphql::{graphiql, graphql};
