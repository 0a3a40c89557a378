// handlers/mod.rs - one module per service, each exposing `routes()`
//
// Public:    health, venues, trivia
// Protected: coffee (writes and detail view), casting (everything)
//
// Protected handlers take an `Authorized<P>` extractor as their first argument;
// the permission `P` is checked before the body is parsed.

pub mod casting;
pub mod coffee;
pub mod health;
pub mod trivia;
pub mod venues;
