/// `F[v]/(v^3 - beta)`, a cubic extension over a supplied base field.
pub mod cubic;
/// `F[u]/(u^2 - beta)`, a quadratic extension over a supplied base field.
pub mod quadratic;
