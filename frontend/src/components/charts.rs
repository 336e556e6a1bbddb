//! Bar charts drawn with plain CSS widths and heights.

use finanzas_core::format::{format_money, format_percent};
use finanzas_core::stats::{CategorySlice, MonthTotals};
use yew::prelude::*;

const SLICE_COLORS: [&str; 8] = [
    "bg-[#173E63]",
    "bg-[#1D617A]",
    "bg-sky-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-violet-500",
    "bg-slate-400",
];

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub months: Vec<MonthTotals>,
    pub symbol: AttrValue,
}

/// Income and expense columns per month, scaled to the largest value.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let peak = props
        .months
        .iter()
        .flat_map(|m| [m.income, m.expenses])
        .fold(0.0_f64, f64::max);

    let height = |value: f64| -> String {
        let pct = if peak > 0.0 { value / peak * 100.0 } else { 0.0 };
        format!("height: {:.1}%", pct.max(if value > 0.0 { 2.0 } else { 0.0 }))
    };

    html! {
        <div>
            <div class="flex items-end gap-4 h-48">
                { for props.months.iter().map(|m| html! {
                    <div class="flex-1 flex flex-col items-center gap-2 h-full">
                        <div class="flex-1 w-full flex items-end justify-center gap-1">
                            <div class="w-1/3 bg-emerald-500 rounded-t" style={height(m.income)}
                                title={format!("Ingresos: {}", format_money(m.income, &props.symbol))}></div>
                            <div class="w-1/3 bg-rose-500 rounded-t" style={height(m.expenses)}
                                title={format!("Gastos: {}", format_money(m.expenses, &props.symbol))}></div>
                        </div>
                        <span class="text-[11px] font-bold uppercase text-slate-500">{ m.label() }</span>
                    </div>
                }) }
            </div>
            <div class="flex gap-4 mt-4 text-xs text-slate-500">
                <span class="flex items-center gap-1"><span class="w-3 h-3 rounded bg-emerald-500"></span>{"Ingresos"}</span>
                <span class="flex items-center gap-1"><span class="w-3 h-3 rounded bg-rose-500"></span>{"Gastos"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BreakdownChartProps {
    pub slices: Vec<CategorySlice>,
    pub symbol: AttrValue,
}

#[function_component(BreakdownChart)]
pub fn breakdown_chart(props: &BreakdownChartProps) -> Html {
    if props.slices.is_empty() {
        return html! {
            <p class="py-6 text-center text-sm text-slate-400">{"No hay gastos registrados."}</p>
        };
    }

    html! {
        <div class="space-y-4">
            <div class="flex h-3 w-full overflow-hidden rounded-full bg-slate-100">
                { for props.slices.iter().zip(SLICE_COLORS.iter()).map(|(slice, color)| html! {
                    <div class={*color} style={format!("width: {:.2}%", slice.percentage)}></div>
                }) }
            </div>
            <ul class="space-y-2">
                { for props.slices.iter().zip(SLICE_COLORS.iter()).map(|(slice, color)| html! {
                    <li class="flex items-center justify-between text-sm">
                        <span class="flex items-center gap-2 text-slate-600">
                            <span class={classes!("w-3", "h-3", "rounded", *color)}></span>
                            { slice.name.clone() }
                        </span>
                        <span class="font-semibold text-[#173E63]">
                            { format_money(slice.amount, &props.symbol) }
                            <span class="ml-2 text-xs text-slate-400">{ format_percent(slice.percentage) }</span>
                        </span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
