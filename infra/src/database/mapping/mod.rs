//! SQL mapping layer
//!
//! Translates declarative mapper documents into an executable dispatch
//! table. Discovery, template parsing, and type-alias resolution all happen
//! once while the factory is built; everything afterwards is a read-only
//! lookup, which is what makes the session template safe to share.

pub mod alias;
pub mod factory;
pub mod loader;
pub mod statement;

pub use alias::TypeAliasRegistry;
pub use factory::MappingFactory;
pub use loader::{MapperDocument, StatementDefinition};
pub use statement::{MappedStatement, StatementKind};
