/// A scoped permission a route requires, carried as a type parameter
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

macro_rules! permissions {
    ($($(#[$doc:meta])* $ty:ident => $name:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy)]
            pub struct $ty;

            impl Permission for $ty {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permissions! {
    GetDrinksDetail => "get:drinks-detail",
    PostDrinks => "post:drinks",
    PatchDrinks => "patch:drinks",
    DeleteDrinks => "delete:drinks",

    GetActors => "get:actors",
    PostActors => "post:actors",
    PatchActors => "patch:actors",
    DeleteActors => "delete:actors",

    GetMovies => "get:movies",
    PostMovies => "post:movies",
    PatchMovies => "patch:movies",
    DeleteMovies => "delete:movies",
}
