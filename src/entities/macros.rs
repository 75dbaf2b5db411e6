//! Macros for reducing boilerplate when defining records
//!
//! Every record type stores `id`, `title`, `created_at` and `updated_at`
//! under the same names. [`impl_record!`] generates the [`Record`] impl from
//! those fields plus the per-type pieces named in the invocation.
//!
//! [`Record`]: crate::core::entity::Record

/// Implement [`Record`](crate::core::entity::Record) for a record struct
///
/// The type must provide an inherent
/// `fn validate_draft(draft, &CollectionSettings) -> Result<Self, ValidationError>`.
///
/// - `description:` the field searched alongside `title`
/// - `categories:` `one(field)` for a single `String`, `many(field)` for a `Vec<String>`
/// - `date:` the `NaiveDate` field used by date filters and date sorting
/// - `keep:` (optional) server-owned fields that survive a full update
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Activity, ActivityDraft, "activity", "activities", {
///     description: description,
///     categories: many(categories),
///     date: date,
///     keep: [registrations],
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    (@categories $this:ident, one($field:ident)) => {
        ::std::slice::from_ref(&$this.$field)
    };
    (@categories $this:ident, many($field:ident)) => {
        $this.$field.as_slice()
    };
    (
        $type:ident,
        $draft:ty,
        $singular:expr,
        $plural:expr,
        {
            description: $description:ident,
            categories: $kind:ident ( $categories:ident ),
            date: $date:ident
            $(, keep: [ $( $kept:ident ),* $(,)? ] )?
            $(,)?
        }
    ) => {
        impl $crate::core::entity::Record for $type {
            type Draft = $draft;

            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn description(&self) -> &str {
                &self.$description
            }

            fn categories(&self) -> &[String] {
                let this = self;
                $crate::impl_record!(@categories this, $kind($categories))
            }

            fn date(&self) -> ::chrono::NaiveDate {
                self.$date
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }

            fn from_draft(
                draft: Self::Draft,
                settings: &$crate::config::CollectionSettings,
            ) -> Result<Self, $crate::core::error::ValidationError> {
                Self::validate_draft(draft, settings)
            }

            fn carry_over(&mut self, previous: &Self) {
                self.id = previous.id;
                self.created_at = previous.created_at;
                $( $( self.$kept = previous.$kept.clone(); )* )?
            }
        }
    };
}
