use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    pub open: bool,
    /// Click fuera del contenido
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Capa flotante con fondo transparente. Un click en el fondo cierra;
/// los clicks dentro del contenido no se propagan.
#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    if !props.open {
        return html! {};
    }

    let backdrop_click = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="popover-backdrop" onclick={backdrop_click}>
            <div class={classes!("popover-content", props.class.clone())} onclick={stop}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
