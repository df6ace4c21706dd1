//! Pagination and sorting core shared by the paged search endpoints.
//!
//! A paged search request carries a page number, a page size, and an ordered list of
//! requested sorts. The sorts are applied to a query through a per-domain resolver, so a
//! request can never order by a column the call site didn't expose. The fetched page is
//! wrapped in an envelope carrying the pagination metadata.

use sea_orm::{
    ConnectionTrait, IntoSimpleExpr, ItemsAndPagesNumber, Order, PaginatorTrait, QueryOrder,
    SelectorTrait,
};
use serde::Serialize;

use crate::error::BoardResult;

/// The default page number.
pub const DEFAULT_PAGE: u64 = 1;
/// The default amount of records per page.
pub const DEFAULT_PAGE_SIZE: u64 = 5;
/// The maximum accepted amount of records per page.
pub const MAX_PAGE_SIZE: u64 = 30;

/// The direction of an ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Parses a direction token, falling back to ascending for anything unknown.
    pub fn parse_or_default(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

impl From<SortDirection> for Order {
    fn from(value: SortDirection) -> Self {
        match value {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// A requested sort, meaning a field name paired with a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// The request-supplied field name. Resolved to a column when applied.
    pub field: String,
    /// The requested direction.
    pub direction: SortDirection,
}

/// A validated pagination request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// The 1-based page number.
    pub page: u64,
    /// The amount of records per page.
    pub page_size: u64,
    /// The requested sorts, in request order.
    pub sorts: Vec<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sorts: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Builds a request from raw query pairs, meaning the `page`, `pageSize` and repeated
    /// `sort=field,direction` parameters of a paged search route.
    ///
    /// Invalid values are clamped rather than rejected: a page below 1 becomes the first
    /// page, a page size outside `1..=MAX_PAGE_SIZE` becomes the default one, and a sort
    /// with an unknown direction token is treated as ascending.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut req = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => req.page = value.parse().unwrap_or(DEFAULT_PAGE).max(1),
                "pageSize" => {
                    req.page_size = match value.parse() {
                        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
                        _ => DEFAULT_PAGE_SIZE,
                    }
                }
                "sort" => {
                    let (field, direction) = match value.split_once(',') {
                        Some((field, token)) => (field, SortDirection::parse_or_default(token)),
                        None => (value.as_str(), SortDirection::Asc),
                    };
                    if !field.is_empty() {
                        req.sorts.push(Sort {
                            field: field.to_owned(),
                            direction,
                        });
                    }
                }
                _ => (),
            }
        }

        req
    }

    /// Whether the request carries at least one sort.
    pub fn is_sorted(&self) -> bool {
        !self.sorts.is_empty()
    }
}

/// Appends the ordering clauses of the requested sorts to the provided query.
///
/// Each field name goes through `resolve`. A field the resolver doesn't know is skipped
/// silently, without appending a clause. The clauses are appended in request order, which
/// governs the SQL tie-break precedence: the first requested field is the primary sort key.
pub fn apply_sort<Q, F, C>(query: Q, sorts: &[Sort], resolve: F) -> Q
where
    Q: QueryOrder,
    F: Fn(&str) -> Option<C>,
    C: IntoSimpleExpr,
{
    sorts
        .iter()
        .fold(query, |query, sort| match resolve(&sort.field) {
            Some(col) => query.order_by(col, sort.direction.into()),
            None => query,
        })
}

/// A page of records with its pagination metadata.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// The records of the requested page.
    pub content: Vec<T>,
    /// The pagination metadata.
    pub pageable: Pageable,
}

/// The pagination metadata of a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    /// The 1-based page number.
    pub page: u64,
    /// The amount of records per page.
    pub page_size: u64,
    /// The total amount of records matched by the query.
    pub total_elements: u64,
    /// The total amount of pages.
    pub total_pages: u64,
    /// Whether the request carried at least one sort.
    pub sorted: bool,
}

/// Fetches the page requested by `req` and wraps it in the response envelope.
///
/// A page past the last one yields an empty content with intact totals.
pub async fn fetch_page<'db, C, Q>(
    conn: &'db C,
    query: Q,
    req: &PageRequest,
) -> BoardResult<Page<<Q::Selector as SelectorTrait>::Item>>
where
    C: ConnectionTrait,
    Q: PaginatorTrait<'db, C>,
{
    let paginator = query.paginate(conn, req.page_size);

    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;
    let content = paginator.fetch_page(req.page.saturating_sub(1)).await?;

    Ok(Page {
        content,
        pageable: Pageable {
            page: req.page,
            page_size: req.page_size,
            total_elements: number_of_items,
            total_pages: number_of_pages,
            sorted: req.is_sorted(),
        },
    })
}

#[cfg(test)]
mod tests {
    use entity::members;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn member_column(field: &str) -> Option<members::Column> {
        match field {
            "id" => Some(members::Column::Id),
            "username" => Some(members::Column::Username),
            _ => None,
        }
    }

    fn sql_of(query: sea_orm::Select<members::Entity>) -> String {
        query.build(DbBackend::MySql).to_string()
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let req = PageRequest::from_query_pairs(pairs(&[("page", "0")]));
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn oversized_page_size_falls_back_to_default() {
        let req = PageRequest::from_query_pairs(pairs(&[("pageSize", "100")]));
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_in_range_is_kept() {
        let req = PageRequest::from_query_pairs(pairs(&[("page", "3"), ("pageSize", "10")]));
        assert_eq!(req.page, 3);
        assert_eq!(req.page_size, 10);
    }

    #[test]
    fn unparseable_params_fall_back_to_defaults() {
        let req = PageRequest::from_query_pairs(pairs(&[("page", "abc"), ("pageSize", "-3")]));
        assert_eq!(req.page, DEFAULT_PAGE);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn sorts_keep_request_order() {
        let req = PageRequest::from_query_pairs(pairs(&[
            ("sort", "username,asc"),
            ("sort", "id,desc"),
        ]));
        assert!(req.is_sorted());
        assert_eq!(
            req.sorts,
            vec![
                Sort {
                    field: "username".to_owned(),
                    direction: SortDirection::Asc,
                },
                Sort {
                    field: "id".to_owned(),
                    direction: SortDirection::Desc,
                },
            ]
        );
    }

    #[test]
    fn bare_or_unknown_direction_defaults_to_ascending() {
        let req = PageRequest::from_query_pairs(pairs(&[
            ("sort", "username"),
            ("sort", "id,sideways"),
        ]));
        assert_eq!(req.sorts[0].direction, SortDirection::Asc);
        assert_eq!(req.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn apply_sort_preserves_request_order() {
        let req = PageRequest::from_query_pairs(pairs(&[
            ("sort", "username,asc"),
            ("sort", "id,desc"),
        ]));
        let sql = sql_of(apply_sort(
            members::Entity::find(),
            &req.sorts,
            member_column,
        ));
        assert!(
            sql.ends_with("ORDER BY `members`.`username` ASC, `members`.`id` DESC"),
            "{sql}"
        );
    }

    #[test]
    fn unknown_field_adds_no_clause() {
        let sorts = [Sort {
            field: "not_a_column".to_owned(),
            direction: SortDirection::Desc,
        }];
        let sql = sql_of(apply_sort(members::Entity::find(), &sorts, member_column));
        assert!(!sql.contains("ORDER BY"), "{sql}");
    }

    #[test]
    fn unknown_fields_are_skipped_among_known_ones() {
        let req = PageRequest::from_query_pairs(pairs(&[
            ("sort", "score,desc"),
            ("sort", "id,desc"),
        ]));
        let sql = sql_of(apply_sort(
            members::Entity::find(),
            &req.sorts,
            member_column,
        ));
        assert!(sql.ends_with("ORDER BY `members`.`id` DESC"), "{sql}");
    }
}
