//! Products view: searchable list with create and delete

use crate::components::{NavBar, Spinner};
use crate::services::ProductService;
use shopdash_http::types::{Product, ProductInput};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct ProductForm {
    name: String,
    description: String,
    price: String,
    stock: String,
}

impl ProductForm {
    fn to_input(&self) -> Result<ProductInput, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        let stock = match self.stock.trim() {
            "" => 0,
            raw => raw
                .parse::<u32>()
                .map_err(|_| "Stock must be a whole number".to_string())?,
        };
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            description,
            price,
            stock,
        })
    }
}

fn on_field(
    form: &UseStateHandle<ProductForm>,
    set: fn(&mut ProductForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        set(&mut next, input.value());
        form.set(next);
    })
}

/// Numbers list requests so a slow response cannot overwrite a newer one
#[derive(Debug, Default)]
struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Bumped to force a reload after mutations
#[derive(Debug, Default, PartialEq)]
struct Revision(u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[function_component(ProductsView)]
pub fn products_view() -> Html {
    let products = use_state(|| Option::<Vec<Product>>::None);
    let total = use_state(|| 0usize);
    let search = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let form = use_state(ProductForm::default);
    let revision = use_reducer(Revision::default);
    let requests = use_mut_ref(RequestTracker::default);

    {
        let products = products.clone();
        let total = total.clone();
        let error = error.clone();
        use_effect_with(((*search).clone(), revision.0), move |(search, _)| {
            let search = Some(search.clone()).filter(|s| !s.trim().is_empty());
            let ticket = requests.borrow_mut().begin();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ProductService::new().list(search).await;
                if !requests.borrow().is_current(ticket) {
                    tracing::debug!(ticket, "Dropping superseded product list response");
                    return;
                }
                match result {
                    Ok(list) => {
                        total.set(list.total);
                        products.set(Some(list.products));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load products: {e}");
                        error.set(Some(e.to_string()));
                        products.set(Some(Vec::new()));
                    }
                }
            });
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_create = {
        let form = form.clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match form.to_input() {
                Ok(input) => input,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let form = form.clone();
            let error = error.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ProductService::new().create(input).await {
                    Ok(product) => {
                        tracing::info!(id = %product.id, "Product created");
                        form.set(ProductForm::default());
                        error.set(None);
                        revision.dispatch(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |id: String| {
            let error = error.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ProductService::new().delete(&id).await {
                    Ok(()) => {
                        tracing::info!(%id, "Product deleted");
                        revision.dispatch(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let list = match &*products {
        None => html! { <Spinner text={Some("Loading products...".to_string())} /> },
        Some(items) if items.is_empty() => html! {
            <p class="text-gray-500 p-6 text-center">{"No products found."}</p>
        },
        Some(items) => html! {
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-sm text-gray-500">
                    <tr>
                        <th class="p-3">{"Name"}</th>
                        <th class="p-3">{"Price"}</th>
                        <th class="p-3">{"Stock"}</th>
                        <th class="p-3"></th>
                    </tr>
                </thead>
                <tbody>
                    { for items.iter().map(|product| {
                        let id = product.id.clone();
                        let on_delete = on_delete.reform(move |_: MouseEvent| id.clone());
                        html! {
                            <tr key={product.id.clone()} class="border-t border-gray-100">
                                <td class="p-3">
                                    <div class="font-medium text-gray-900">{&product.name}</div>
                                    if let Some(description) = &product.description {
                                        <div class="text-sm text-gray-500">{description}</div>
                                    }
                                </td>
                                <td class="p-3">{format!("{:.2}", product.price)}</td>
                                <td class="p-3">{product.stock.to_string()}</td>
                                <td class="p-3 text-right">
                                    <button onclick={on_delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar />
            <main class="max-w-7xl mx-auto px-4 py-8 space-y-6">
                <div class="flex justify-between items-center">
                    <h2 class="text-2xl font-bold text-gray-900">{format!("Products ({})", *total)}</h2>
                    <input
                        type="search"
                        placeholder="Search products"
                        value={(*search).clone()}
                        oninput={on_search}
                        class="px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>

                if let Some(error) = &*error {
                    <div class="p-3 bg-red-50 text-red-700 rounded text-sm">{error}</div>
                }

                <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 grid grid-cols-1 md:grid-cols-5 gap-3">
                    <input placeholder="Name" value={form.name.clone()}
                        oninput={on_field(&form, |f, v| f.name = v)}
                        class="px-3 py-2 border border-gray-300 rounded-lg" />
                    <input placeholder="Description" value={form.description.clone()}
                        oninput={on_field(&form, |f, v| f.description = v)}
                        class="px-3 py-2 border border-gray-300 rounded-lg" />
                    <input placeholder="Price" inputmode="decimal" value={form.price.clone()}
                        oninput={on_field(&form, |f, v| f.price = v)}
                        class="px-3 py-2 border border-gray-300 rounded-lg" />
                    <input placeholder="Stock" inputmode="numeric" value={form.stock.clone()}
                        oninput={on_field(&form, |f, v| f.stock = v)}
                        class="px-3 py-2 border border-gray-300 rounded-lg" />
                    <button type="submit" class="bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg">
                        {"Add product"}
                    </button>
                </form>

                <div class="bg-white rounded-lg shadow overflow-hidden">
                    {list}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            description: "  ".into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    #[test]
    fn parses_form_fields() {
        let input = form(" Widget ", "2.50", "").to_input().unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, 2.5);
        assert_eq!(input.stock, 0);
        assert_eq!(input.description, None);
    }

    #[test]
    fn rejects_unparseable_numbers() {
        assert!(form("Widget", "cheap", "1").to_input().is_err());
        assert!(form("Widget", "1", "-3").to_input().is_err());
    }

    #[test]
    fn only_latest_request_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn revision_bumps_from_latest_state() {
        let revision = Rc::new(Revision::default());
        let revision = revision.reduce(()).reduce(());
        assert_eq!(*revision, Revision(2));

        let wrapped = Rc::new(Revision(u32::MAX)).reduce(());
        assert_eq!(*wrapped, Revision(0));
    }
}
