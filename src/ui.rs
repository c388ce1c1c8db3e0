pub fn render_index(date: &str, remaining: usize) -> String {
    let noun = if remaining == 1 { "task" } else { "tasks" };
    INDEX_HTML
        .replace("{{COUNT}}", &format!("{date}: {remaining} {noun} left"))
        .replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Todo</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    #todo-form {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    #todo-input {
      flex: 1 1 220px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 14px;
      padding: 12px 16px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
    }

    #todo-input:focus,
    #todo-date:focus {
      outline: 2px solid var(--accent);
      outline-offset: 1px;
    }

    #todo-date {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 14px;
      padding: 12px 14px;
      font-size: 0.95rem;
      font-family: inherit;
      background: white;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .list-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    #todo-count {
      font-size: 0.95rem;
      color: #6b645d;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .filter-btn {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      box-shadow: none;
    }

    .filter-btn.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    #todo-list,
    #week-chart,
    #recent-completed-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .todo-item {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 12px 16px;
    }

    .todo-item input[type="checkbox"] {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
    }

    .todo-item label {
      flex: 1;
      font-size: 1rem;
      overflow-wrap: anywhere;
    }

    .todo-item.completed label {
      color: #8b857d;
      text-decoration: line-through;
    }

    .delete-btn {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .list-empty {
      margin: 0;
      color: #8b857d;
      font-size: 0.95rem;
    }

    .panel {
      display: grid;
      gap: 14px;
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .panel h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    #week-summary {
      margin: 0;
      color: #6b645d;
      font-size: 0.95rem;
    }

    .week-bar-item {
      display: grid;
      grid-template-columns: 52px 1fr 56px;
      align-items: center;
      gap: 10px;
    }

    .week-label {
      font-size: 0.85rem;
      color: #7a746d;
    }

    .week-bar-wrap {
      height: 12px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
      overflow: hidden;
    }

    .week-bar-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 250ms ease;
    }

    .week-value {
      font-size: 0.85rem;
      color: var(--accent-2);
      text-align: right;
      font-weight: 600;
    }

    .history-item {
      background: rgba(47, 72, 88, 0.04);
    }

    .history-marker {
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--accent-2);
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 4px 10px;
      white-space: nowrap;
    }

    .actions-row {
      display: flex;
      justify-content: flex-end;
    }

    #clear-completed {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .btn-add {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Todo</h1>
      <p class="subtitle">One list per day, a week of progress at a glance.</p>
    </header>

    <form id="todo-form">
      <input id="todo-input" type="text" placeholder="What needs doing?" autocomplete="off" />
      <input id="todo-date" type="date" value="{{DATE}}" />
      <button class="btn-add" type="submit">Add</button>
    </form>

    <section>
      <div class="list-header">
        <span id="todo-count">{{COUNT}}</span>
        <div class="tabs" role="tablist">
          <button class="filter-btn active" type="button" data-filter="all" role="tab" aria-selected="true">All</button>
          <button class="filter-btn" type="button" data-filter="active" role="tab" aria-selected="false">Active</button>
          <button class="filter-btn" type="button" data-filter="completed" role="tab" aria-selected="false">Completed</button>
        </div>
      </div>
    </section>

    <ul id="todo-list"></ul>

    <div class="actions-row">
      <button id="clear-completed" type="button">Clear completed</button>
    </div>

    <section class="panel">
      <h2>Last 7 days</h2>
      <p id="week-summary"></p>
      <ul id="week-chart"></ul>
    </section>

    <section class="panel">
      <h2>Recently completed</h2>
      <ul id="recent-completed-list"></ul>
      <p id="recent-completed-empty" class="list-empty">Nothing finished in the last few days.</p>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const todoForm = document.getElementById('todo-form');
    const todoInput = document.getElementById('todo-input');
    const todoDate = document.getElementById('todo-date');
    const todoList = document.getElementById('todo-list');
    const countText = document.getElementById('todo-count');
    const clearCompletedBtn = document.getElementById('clear-completed');
    const filterButtons = Array.from(document.querySelectorAll('.filter-btn'));
    const weekSummary = document.getElementById('week-summary');
    const weekChart = document.getElementById('week-chart');
    const recentCompletedList = document.getElementById('recent-completed-list');
    const recentCompletedEmpty = document.getElementById('recent-completed-empty');
    const statusEl = document.getElementById('status');

    let selectedDate = todoDate.value;
    let currentFilter = 'all';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderDay = (day) => {
      todoList.innerHTML = '';

      day.tasks.forEach((todo) => {
        const item = document.createElement('li');
        item.className = 'todo-item';
        if (todo.completed) item.classList.add('completed');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = todo.completed;
        checkbox.setAttribute('aria-label', `Toggle ${todo.text}`);
        checkbox.addEventListener('change', () => {
          mutate('/api/toggle', { date: selectedDate, id: todo.id });
        });

        const label = document.createElement('label');
        label.textContent = todo.text;

        const deleteBtn = document.createElement('button');
        deleteBtn.type = 'button';
        deleteBtn.className = 'delete-btn';
        deleteBtn.textContent = 'Delete';
        deleteBtn.addEventListener('click', () => {
          mutate('/api/delete', { date: selectedDate, id: todo.id });
        });

        item.append(checkbox, label, deleteBtn);
        todoList.append(item);
      });

      const noun = day.remaining === 1 ? 'task' : 'tasks';
      countText.textContent = `${day.date}: ${day.remaining} ${noun} left`;
    };

    const renderStats = (stats) => {
      weekChart.innerHTML = '';

      stats.week.forEach((cell) => {
        const item = document.createElement('li');
        item.className = 'week-bar-item';

        const label = document.createElement('span');
        label.className = 'week-label';
        label.textContent = cell.date.slice(5);

        const barWrap = document.createElement('div');
        barWrap.className = 'week-bar-wrap';

        const bar = document.createElement('div');
        bar.className = 'week-bar-fill';
        bar.style.width = `${cell.ratio}%`;

        const value = document.createElement('span');
        value.className = 'week-value';
        value.textContent = `${cell.done}/${cell.total}`;

        barWrap.append(bar);
        item.append(label, barWrap, value);
        weekChart.append(item);
      });

      const s = stats.summary;
      weekSummary.textContent = `Completed ${s.rate}% of the week (${s.completed}/${s.total}).`;

      recentCompletedList.innerHTML = '';
      stats.recent_completed.forEach((entry) => {
        const item = document.createElement('li');
        item.className = 'todo-item completed history-item';

        const marker = document.createElement('span');
        marker.className = 'history-marker';
        marker.textContent = entry.label;

        const label = document.createElement('label');
        label.textContent = entry.text;

        item.append(marker, label);
        recentCompletedList.append(item);
      });
      recentCompletedEmpty.hidden = stats.recent_completed.length > 0;
    };

    const loadDay = async () => {
      const params = new URLSearchParams({ date: selectedDate, filter: currentFilter });
      renderDay(await api(`/api/day?${params}`));
    };

    const loadStats = async () => {
      const params = new URLSearchParams({ date: selectedDate });
      renderStats(await api(`/api/stats?${params}`));
    };

    const refresh = async () => {
      await Promise.all([loadDay(), loadStats()]);
    };

    const mutate = async (path, body) => {
      setStatus('Saving...', 'info');
      try {
        await api(path, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    todoForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const text = todoInput.value.trim();
      if (!text) return;

      mutate('/api/add', { date: selectedDate, text }).then(() => {
        todoInput.value = '';
        todoInput.focus();
      });
    });

    todoDate.addEventListener('change', () => {
      selectedDate = todoDate.value || todoDate.defaultValue;
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    clearCompletedBtn.addEventListener('click', () => {
      mutate('/api/clear-completed', { date: selectedDate });
    });

    filterButtons.forEach((button) => {
      button.addEventListener('click', () => {
        currentFilter = button.dataset.filter;
        filterButtons.forEach((btn) => {
          const isActive = btn === button;
          btn.classList.toggle('active', isActive);
          btn.setAttribute('aria-selected', String(isActive));
        });
        loadDay().catch((err) => setStatus(err.message, 'error'));
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
